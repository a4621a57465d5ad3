//! Failure types for everything around the recovery flow.
//!
//! An unreachable target is not in here: a silent probe is a normal result and
//! is reported as `false` by the prober.

use std::io;

use thiserror::Error;

/// Which half of a toggle cycle a command belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterAction {
    Disable,
    Enable,
}

impl AdapterAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AdapterAction::Disable => "disable",
            AdapterAction::Enable => "enable",
        }
    }
}

impl std::fmt::Display for AdapterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("probe target cannot be empty")]
    Empty,

    #[error("probe target contains whitespace: '{0}'")]
    Whitespace(String),

    #[error("invalid probe target: '{0}' is neither an IP address nor a host name")]
    Invalid(String),
}

/// The adapter command could not be issued, or it reported an error.
#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("could not run the {action} command for '{adapter}': {source}")]
    Spawn {
        action: AdapterAction,
        adapter: String,
        #[source]
        source: io::Error,
    },

    #[error("{action} of '{adapter}' failed (exit code {code:?}): {output}")]
    CommandFailed {
        action: AdapterAction,
        adapter: String,
        code: Option<i32>,
        output: String,
    },

    #[error("adapter toggling is not supported on this platform")]
    Unsupported,
}

/// The process cannot continue without elevated rights.
#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("administrator rights are required to toggle network adapters")]
    NotElevated,

    #[error("failed to request an elevated relaunch: {0}")]
    RelaunchFailed(#[source] io::Error),

    #[error("the elevation request was declined or could not be started (exit code {0:?})")]
    RelaunchDeclined(Option<i32>),

    #[error("automatic elevation is not supported on this platform; re-run as root")]
    Unsupported,
}

/// The settings page could not be opened. Purely cosmetic.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("could not start the settings launcher: {0}")]
    Spawn(#[source] io::Error),

    #[error("refusing to open '{0}': not a plain settings URI")]
    InvalidPage(String),

    #[error("settings launcher exited with code {0:?}")]
    CommandFailed(Option<i32>),

    #[error("opening settings pages is not supported on this platform")]
    Unsupported,
}
