pub mod check;
pub mod menu;
pub mod privilege;
pub mod run;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use netrevive_common::config::{
    Config, DEFAULT_ADAPTER, DEFAULT_POST_TOGGLE_WAIT, DEFAULT_PROBE_TIMEOUT,
    DEFAULT_SETTINGS_PAGE, DEFAULT_TOGGLE_PAUSE, default_targets,
};
use netrevive_common::network::target::ProbeTarget;

#[derive(Parser, Debug)]
#[command(name = "netrevive")]
#[command(version)]
#[command(about = "Gets a Windows machine back online by cycling its network adapter once.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address to ping, in order; repeat to add more [default: 1.1.1.1, 8.8.8.8]
    #[arg(short = 't', long = "target", value_name = "ADDR", global = true)]
    pub targets: Vec<ProbeTarget>,

    /// How long each ping waits for its reply
    #[arg(
        long,
        value_name = "MS",
        global = true,
        default_value_t = DEFAULT_PROBE_TIMEOUT.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_ms: u64,

    /// Adapter name exactly as Windows shows it
    #[arg(short, long, value_name = "NAME", global = true, default_value = DEFAULT_ADAPTER)]
    pub adapter: String,

    /// Seconds between disabling and re-enabling the adapter
    #[arg(long, value_name = "SECS", global = true, default_value_t = DEFAULT_TOGGLE_PAUSE.as_secs())]
    pub pause_secs: u64,

    /// Seconds to wait after the toggle before checking again
    #[arg(long, value_name = "SECS", global = true, default_value_t = DEFAULT_POST_TOGGLE_WAIT.as_secs())]
    pub wait_secs: u64,

    /// Settings page opened once the connection is back
    #[arg(long, value_name = "URI", global = true, default_value = DEFAULT_SETTINGS_PAGE)]
    pub settings_page: String,

    /// Do not open the settings page after a successful recovery
    #[arg(long, global = true)]
    pub no_launch: bool,

    /// Hide the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output; -q hides headers, -qq hides everything below warnings
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu: run the recovery as often as needed (default)
    #[command(alias = "m")]
    Menu,
    /// Run the recovery once and exit; fails if still offline
    #[command(alias = "r")]
    Run,
    /// Only check connectivity, never touch the adapter
    #[command(alias = "c")]
    Check,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Menu)
    }

    pub fn to_config(&self) -> Config {
        let targets: Vec<ProbeTarget> = if self.targets.is_empty() {
            default_targets()
        } else {
            self.targets.clone()
        };

        Config {
            targets,
            probe_timeout: Duration::from_millis(self.timeout_ms),
            adapter: self.adapter.clone(),
            toggle_pause: Duration::from_secs(self.pause_secs),
            post_toggle_wait: Duration::from_secs(self.wait_secs),
            settings_page: self.settings_page.clone(),
            launch_settings: !self.no_launch,
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_match_config_defaults() {
        let cli = CommandLine::try_parse_from(["netrevive"]).unwrap();
        let cfg = cli.to_config();
        let default = Config::default();

        assert_eq!(cli.command(), Commands::Menu);
        assert_eq!(cfg.targets, default.targets);
        assert_eq!(cfg.probe_timeout, default.probe_timeout);
        assert_eq!(cfg.adapter, default.adapter);
        assert_eq!(cfg.toggle_pause, default.toggle_pause);
        assert_eq!(cfg.post_toggle_wait, default.post_toggle_wait);
        assert_eq!(cfg.settings_page, default.settings_page);
        assert!(cfg.launch_settings);
    }

    #[test]
    fn flags_override_config() {
        let cli = CommandLine::try_parse_from([
            "netrevive", "r", "-t", "9.9.9.9", "-t", "dns.google", "-a", "Ethernet",
            "--timeout-ms", "500", "--wait-secs", "0", "--no-launch", "-qq",
        ])
        .unwrap();
        let cfg = cli.to_config();

        assert_eq!(cli.command(), Commands::Run);
        assert_eq!(
            cfg.targets,
            vec![
                ProbeTarget::from_str("9.9.9.9").unwrap(),
                ProbeTarget::from_str("dns.google").unwrap()
            ]
        );
        assert_eq!(cfg.adapter, "Ethernet");
        assert_eq!(cfg.probe_timeout, Duration::from_millis(500));
        assert_eq!(cfg.post_toggle_wait, Duration::ZERO);
        assert!(!cfg.launch_settings);
        assert_eq!(cfg.quiet, 2);
    }

    #[test]
    fn rejects_bad_targets_and_zero_timeout() {
        assert!(CommandLine::try_parse_from(["netrevive", "-t", "10.0.0.256"]).is_err());
        assert!(CommandLine::try_parse_from(["netrevive", "--timeout-ms", "0"]).is_err());
    }
}
