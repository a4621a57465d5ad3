use async_trait::async_trait;
use netrevive_common::error::{AdapterAction, ToggleError};
use netrevive_common::ports::AdapterController;
use tokio::process::Command;
use tracing::debug;

use super::summarize_output;

/// Toggles an interface with `netsh interface set interface <name> admin=...`.
///
/// Needs an elevated process; without it netsh exits non-zero and the error
/// text ends up in [`ToggleError::CommandFailed`].
pub struct NetshAdapter;

pub(crate) fn netsh_args(adapter: &str, action: AdapterAction) -> [String; 5] {
    let state = match action {
        AdapterAction::Disable => "admin=disabled",
        AdapterAction::Enable => "admin=enabled",
    };
    [
        "interface".to_string(),
        "set".to_string(),
        "interface".to_string(),
        adapter.to_string(),
        state.to_string(),
    ]
}

#[async_trait]
impl AdapterController for NetshAdapter {
    async fn set_admin_state(
        &self,
        adapter: &str,
        action: AdapterAction,
    ) -> Result<(), ToggleError> {
        if !cfg!(windows) {
            return Err(ToggleError::Unsupported);
        }

        let output = Command::new("netsh")
            .args(netsh_args(adapter, action))
            .output()
            .await
            .map_err(|source| ToggleError::Spawn {
                action,
                adapter: adapter.to_string(),
                source,
            })?;

        debug!("netsh {action} '{adapter}' exited with {}", output.status);

        if output.status.success() {
            Ok(())
        } else {
            Err(ToggleError::CommandFailed {
                action,
                adapter: adapter.to_string(),
                code: output.status.code(),
                output: summarize_output(&output),
            })
        }
    }
}
