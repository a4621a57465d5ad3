use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use crate::network::target::ProbeTarget;

pub const DEFAULT_ADAPTER: &str = "Wi-Fi";
pub const DEFAULT_SETTINGS_PAGE: &str = "ms-settings:network-mobilehotspot";
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_TOGGLE_PAUSE: Duration = Duration::from_secs(2);
pub const DEFAULT_POST_TOGGLE_WAIT: Duration = Duration::from_secs(5);

/// Cloudflare and Google resolvers. Two literals, so no DNS dependency.
pub fn default_targets() -> Vec<ProbeTarget> {
    vec![
        ProbeTarget::Addr(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1))),
        ProbeTarget::Addr(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8))),
    ]
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Probed in order; the first one that answers ends the probe.
    pub targets: Vec<ProbeTarget>,
    /// How long a single echo request may wait for its reply.
    pub probe_timeout: Duration,
    /// Interface name exactly as the OS knows it (capitalization and hyphen included).
    pub adapter: String,
    /// Gap between disabling and re-enabling the adapter.
    pub toggle_pause: Duration,
    /// Unconditional pause after the toggle cycle, before probing again.
    pub post_toggle_wait: Duration,
    /// Opened once connectivity comes back after a toggle.
    pub settings_page: String,
    /// Disables the settings launch entirely.
    pub launch_settings: bool,
    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            adapter: DEFAULT_ADAPTER.to_string(),
            toggle_pause: DEFAULT_TOGGLE_PAUSE,
            post_toggle_wait: DEFAULT_POST_TOGGLE_WAIT,
            settings_page: DEFAULT_SETTINGS_PAGE.to_string(),
            launch_settings: true,
            no_banner: false,
            quiet: 0,
        }
    }
}
