//! # Probe Target Model
//!
//! Defines what a reachability probe can be pointed at.
//!
//! A target is either:
//! * An IPv4 or IPv6 literal (e.g., `1.1.1.1`, `2606:4700:4700::1111`).
//! * A host name (e.g., `one.one.one.one`), left for the system resolver.
//!
//! IP literals are preferred for the default list since they keep the probe
//! independent of DNS.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::TargetParseError;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// A single address the prober may send an echo request to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProbeTarget {
    /// A literal address, no resolution needed.
    Addr(IpAddr),
    /// A host name, resolved by whatever performs the probe.
    Host(String),
}

impl ProbeTarget {
    pub fn is_literal(&self) -> bool {
        matches!(self, ProbeTarget::Addr(_))
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeTarget::Addr(addr) => write!(f, "{addr}"),
            ProbeTarget::Host(name) => f.write_str(name),
        }
    }
}

impl From<IpAddr> for ProbeTarget {
    fn from(addr: IpAddr) -> Self {
        ProbeTarget::Addr(addr)
    }
}

impl FromStr for ProbeTarget {
    type Err = TargetParseError;

    /// Parses a string into a `ProbeTarget`.
    ///
    /// Supported formats:
    /// * **Address**: IPv4/IPv6 literal (e.g., "8.8.8.8", "::1").
    /// * **Host name**: dot separated labels of letters, digits and hyphens
    ///   (e.g., "dns.google"). A trailing dot is accepted and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TargetParseError::Empty);
        }

        if s.chars().any(char::is_whitespace) {
            return Err(TargetParseError::Whitespace(s.to_string()));
        }

        if let Ok(addr) = s.parse::<IpAddr>() {
            return Ok(ProbeTarget::Addr(addr));
        }

        parse_hostname(s).map(ProbeTarget::Host)
    }
}

/// Validates host name syntax (RFC 1123 labels).
///
/// A name whose last label is purely numeric is rejected, which catches
/// malformed IPv4 literals like "10.0.0.256" instead of handing them to DNS.
fn parse_hostname(s: &str) -> Result<String, TargetParseError> {
    let name = s.strip_suffix('.').unwrap_or(s);
    let invalid = || TargetParseError::Invalid(s.to_string());

    if name.is_empty() || name.len() > MAX_HOSTNAME_LEN {
        return Err(invalid());
    }

    let labels: Vec<&str> = name.split('.').collect();
    for label in &labels {
        if !is_valid_label(label) {
            return Err(invalid());
        }
    }

    let last = labels.last().ok_or_else(invalid)?;
    if last.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    Ok(name.to_ascii_lowercase())
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
