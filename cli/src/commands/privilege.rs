use netrevive_common::error::ElevationError;
use netrevive_common::success;
use netrevive_core::elevation;
use tracing::{info, warn};

use crate::terminal::print;

/// Whether this process may go on to run the flow.
#[derive(Debug, PartialEq, Eq)]
pub enum Privilege {
    Elevated,
    /// An elevated copy was started; this instance must end now.
    HandedOff,
}

/// Checks for Administrator rights and hands off to an elevated relaunch if missing.
///
/// Any failure here is fatal to this process instance.
pub async fn ensure_privileges(q_level: u8) -> anyhow::Result<Privilege> {
    print::header("privilege check", q_level);

    match elevation::ensure_elevated() {
        Ok(()) => {
            success!("Running with Administrator privileges.");
            Ok(Privilege::Elevated)
        }
        Err(ElevationError::NotElevated) => {
            warn!("Administrator rights required. Requesting elevation (UAC prompt)...");
            elevation::relaunch_elevated().await?;
            info!("Elevated instance started. This one exits now.");
            Ok(Privilege::HandedOff)
        }
        Err(e) => Err(e.into()),
    }
}
