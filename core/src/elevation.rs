//! Privilege precondition for adapter toggling.
//!
//! [`ensure_elevated`] only checks. Acting on the failure (relaunching with
//! [`relaunch_elevated`] and exiting) is left to the binary, so nothing here
//! terminates the process on its own.

use std::ffi::OsString;
use std::path::Path;

use is_root::is_root;
use netrevive_common::error::ElevationError;
use tokio::process::Command;
use tracing::debug;

/// Fails with [`ElevationError::NotElevated`] unless running as Administrator (root elsewhere).
pub fn ensure_elevated() -> Result<(), ElevationError> {
    if is_root() {
        Ok(())
    } else {
        Err(ElevationError::NotElevated)
    }
}

/// Starts an elevated copy of the current executable with the same arguments.
///
/// On Windows this goes through `Start-Process -Verb RunAs`, which raises the UAC
/// prompt. Returns once the request was handed off; the caller is expected to exit.
pub async fn relaunch_elevated() -> Result<(), ElevationError> {
    if !cfg!(windows) {
        return Err(ElevationError::Unsupported);
    }

    let exe = std::env::current_exe().map_err(ElevationError::RelaunchFailed)?;
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let script = start_process_script(&exe, &args);
    debug!("requesting elevation: {script}");

    let status = Command::new("powershell")
        .args(["-NoProfile", "-NonInteractive", "-Command", script.as_str()])
        .status()
        .await
        .map_err(ElevationError::RelaunchFailed)?;

    if status.success() {
        Ok(())
    } else {
        Err(ElevationError::RelaunchDeclined(status.code()))
    }
}

/// Builds the PowerShell command line for an elevated relaunch.
///
/// `Start-Process` joins `-ArgumentList` with plain spaces, so each argument is
/// wrapped in double quotes first and then in a single-quoted PowerShell literal.
fn start_process_script(exe: &Path, args: &[OsString]) -> String {
    let mut script = format!(
        "Start-Process -FilePath {} -Verb RunAs",
        ps_quote(&exe.to_string_lossy())
    );

    if !args.is_empty() {
        let list: Vec<String> = args
            .iter()
            .map(|arg| {
                let arg = arg.to_string_lossy().replace('"', "\\\"");
                ps_quote(&format!("\"{arg}\""))
            })
            .collect();
        script.push_str(" -ArgumentList ");
        script.push_str(&list.join(","));
    }

    script
}

/// Single-quoted PowerShell literal; embedded quotes are doubled.
fn ps_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
