//! Result and narration types for a single recovery run.
//!
//! None of this outlives the run that produced it.

use std::time::Duration;

use crate::error::{AdapterAction, LaunchError, ToggleError};
use crate::network::target::ProbeTarget;

/// Final classification of one recovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    AlreadyOnline,
    RecoveredAfterToggle,
    StillOffline,
}

impl RecoveryOutcome {
    pub fn is_online(self) -> bool {
        !matches!(self, RecoveryOutcome::StillOffline)
    }
}

/// Steps of the flow, in the order they can happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ProbeInitial,
    Toggling,
    Waiting,
    ProbeFinal,
    Launching,
}

/// What one pass over the target list found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// The first target that answered, if any.
    pub reachable_via: Option<ProbeTarget>,
    /// How many targets were actually probed before stopping.
    pub attempted: usize,
}

impl ProbeReport {
    pub fn is_reachable(&self) -> bool {
        self.reachable_via.is_some()
    }
}

/// Everything a caller needs to report on a finished run.
#[derive(Debug)]
pub struct RecoveryReport {
    pub outcome: RecoveryOutcome,
    /// Phases in execution order. Never contains a phase twice.
    pub phases: Vec<Phase>,
    pub initial_probe: ProbeReport,
    pub final_probe: Option<ProbeReport>,
    /// Errors from the toggle cycle; the flow carries on regardless.
    pub toggle_errors: Vec<ToggleError>,
    pub launch_error: Option<LaunchError>,
}

impl RecoveryReport {
    pub fn toggled(&self) -> bool {
        self.phases.contains(&Phase::Toggling)
    }

    pub fn launched(&self) -> bool {
        self.phases.contains(&Phase::Launching) && self.launch_error.is_none()
    }
}

/// A status event raised while the flow runs, rendered by a [`NoticeSink`].
///
/// [`NoticeSink`]: crate::ports::NoticeSink
#[derive(Debug)]
pub enum Notice<'a> {
    ProbeStarted { phase: Phase, timeout: Duration },
    Probing(&'a ProbeTarget),
    TargetReachable(&'a ProbeTarget),
    TargetSilent(&'a ProbeTarget),
    AllTargetsDown,
    ToggleStarted { adapter: &'a str },
    AdapterCommand { adapter: &'a str, action: AdapterAction },
    ToggleFailed(&'a ToggleError),
    ToggleComplete { clean: bool },
    WaitStarted(Duration),
    Countdown { remaining: Duration },
    WaitComplete,
    Launching { page: &'a str },
    LaunchFailed(&'a LaunchError),
    Launched,
    Finished(RecoveryOutcome),
}
