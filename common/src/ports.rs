//! # Outbound Ports (Driven Actors)
//!
//! Contracts for everything the recovery flow reaches out to.
//!
//! ## Rules
//! 1. All items here are traits.
//! 2. Concrete system implementations live in `netrevive-core::system`.
//! 3. Test doubles implement the same traits, so the flow never knows the difference.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AdapterAction, LaunchError, ToggleError};
use crate::network::target::ProbeTarget;
use crate::recovery::Notice;

/// Sends a single reachability test to one target.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Returns `true` only if `target` replied within `timeout`.
    ///
    /// Anything else (timeout, unreachable, failure to even send) is `false`.
    async fn probe(&self, target: &ProbeTarget, timeout: Duration) -> bool;
}

/// Changes the administrative state of a named network interface.
///
/// Fire and forget: success only means the command was accepted, not that the
/// link actually came back.
#[async_trait]
pub trait AdapterController: Send + Sync {
    async fn set_admin_state(&self, adapter: &str, action: AdapterAction)
    -> Result<(), ToggleError>;

    async fn disable(&self, adapter: &str) -> Result<(), ToggleError> {
        self.set_admin_state(adapter, AdapterAction::Disable).await
    }

    async fn enable(&self, adapter: &str) -> Result<(), ToggleError> {
        self.set_admin_state(adapter, AdapterAction::Enable).await
    }
}

/// Opens a platform settings page in the operator's session.
#[async_trait]
pub trait SettingsLauncher: Send + Sync {
    async fn open(&self, page: &str) -> Result<(), LaunchError>;
}

/// Presents step-by-step status to whoever is watching.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice<'_>);
}

/// Drops every notice. Handy for callers that only want the report.
pub struct SilentNotices;

impl NoticeSink for SilentNotices {
    fn notify(&self, _notice: Notice<'_>) {}
}
