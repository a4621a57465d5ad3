//! Real implementations of the outbound ports.
//!
//! Each adapter shells out to a stock Windows tool. On other platforms the
//! adapter and launcher report `Unsupported`; the prober uses the local `ping`
//! dialect so connectivity checks still work.

mod netsh;
mod ping;
mod settings;

pub use netsh::NetshAdapter;
pub use ping::{PingFlavor, PingProber};
pub use settings::MsSettingsLauncher;

use std::process::Output;

/// Collapses command output to one line for error messages.
///
/// `netsh` reports failures on stdout, so both streams are considered.
fn summarize_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    stderr
        .lines()
        .chain(stdout.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}
