use async_trait::async_trait;
use netrevive_common::error::LaunchError;
use netrevive_common::ports::SettingsLauncher;
use tokio::process::Command;

/// Characters that `cmd.exe` would treat as syntax instead of part of the URI.
const CMD_METACHARACTERS: &[char] = &['&', '|', '<', '>', '^', '"', '%', '\r', '\n'];

/// Opens `ms-settings:` pages through `cmd /C start`.
///
/// `start` is what hands the URI to the shell's protocol handler. The empty
/// string is the window title `start` would otherwise take from the page.
pub struct MsSettingsLauncher;

pub(crate) fn is_safe_page(page: &str) -> bool {
    !page.is_empty() && !page.contains(CMD_METACHARACTERS)
}

#[async_trait]
impl SettingsLauncher for MsSettingsLauncher {
    async fn open(&self, page: &str) -> Result<(), LaunchError> {
        if !cfg!(windows) {
            return Err(LaunchError::Unsupported);
        }

        if !is_safe_page(page) {
            return Err(LaunchError::InvalidPage(page.to_string()));
        }

        let status = Command::new("cmd")
            .args(["/C", "start", "", page])
            .status()
            .await
            .map_err(LaunchError::Spawn)?;

        if status.success() {
            Ok(())
        } else {
            Err(LaunchError::CommandFailed(status.code()))
        }
    }
}
