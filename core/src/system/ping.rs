use std::ffi::OsString;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use netrevive_common::network::target::ProbeTarget;
use netrevive_common::ports::Prober;
use tokio::process::Command;
use tokio::time;
use tracing::debug;

/// Extra time granted to the `ping` process on top of its own reply timeout.
const GUARD_GRACE: Duration = Duration::from_secs(3);

/// Argument dialect of the platform `ping` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingFlavor {
    /// `ping -n <count> -w <ms>`
    Windows,
    /// `ping -c <count> -W <seconds>` (Linux iputils)
    Unix,
    /// `ping -c <count> -W <ms>` (macOS, FreeBSD)
    Bsd,
}

impl PingFlavor {
    pub fn native() -> Self {
        if cfg!(windows) {
            PingFlavor::Windows
        } else if cfg!(any(target_os = "macos", target_os = "freebsd")) {
            PingFlavor::Bsd
        } else {
            PingFlavor::Unix
        }
    }

    /// One echo request, bounded by `timeout`.
    pub fn args(self, target: &ProbeTarget, timeout: Duration) -> Vec<String> {
        let millis: u128 = timeout.as_millis().max(1);
        let (count_flag, wait_flag, wait) = match self {
            PingFlavor::Windows => ("-n", "-w", millis),
            // -W only takes whole seconds on iputils.
            PingFlavor::Unix => ("-c", "-W", millis.div_ceil(1000)),
            PingFlavor::Bsd => ("-c", "-W", millis),
        };

        vec![
            count_flag.to_string(),
            "1".to_string(),
            wait_flag.to_string(),
            wait.to_string(),
            target.to_string(),
        ]
    }
}

/// Probes with the system `ping` command; exit code 0 means a reply came back.
pub struct PingProber {
    program: OsString,
    flavor: PingFlavor,
    guard_grace: Duration,
}

impl PingProber {
    pub fn native() -> Self {
        Self::with_program("ping", PingFlavor::native())
    }

    /// Runs `program` with `flavor` arguments instead of the `ping` on `PATH`.
    pub fn with_program(program: impl Into<OsString>, flavor: PingFlavor) -> Self {
        Self {
            program: program.into(),
            flavor,
            guard_grace: GUARD_GRACE,
        }
    }

    /// How long past its own timeout the process may run before it is killed.
    pub fn guard_grace(mut self, grace: Duration) -> Self {
        self.guard_grace = grace;
        self
    }
}

#[async_trait]
impl Prober for PingProber {
    async fn probe(&self, target: &ProbeTarget, timeout: Duration) -> bool {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.flavor.args(target, timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match time::timeout(timeout + self.guard_grace, cmd.status()).await {
            Ok(Ok(status)) => {
                debug!("ping {target} exited with {status}");
                status.success()
            }
            Ok(Err(e)) => {
                debug!("could not run {:?} for {target}: {e}", self.program);
                false
            }
            Err(_) => {
                debug!("ping {target} did not exit within its guard, killed");
                false
            }
        }
    }
}
