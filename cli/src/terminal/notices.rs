use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use netrevive_common::error::AdapterAction;
use netrevive_common::ports::NoticeSink;
use netrevive_common::recovery::{Notice, Phase, RecoveryOutcome};
use netrevive_common::success;
use tracing::{Span, error, info, warn};

use crate::terminal::{print, spinner};

/// Narrates a recovery run on the console.
///
/// Status lines go through `tracing`; live feedback (the ping spinner and the
/// post-toggle countdown) lives in spans rendered by the indicatif layer.
pub struct ConsoleNotices {
    q_level: u8,
    live: Mutex<Option<LiveBar>>,
}

struct LiveBar {
    span: Span,
    total: Duration,
}

impl ConsoleNotices {
    pub fn new(q_level: u8) -> Self {
        Self {
            q_level,
            live: Mutex::new(None),
        }
    }

    fn show(&self, span: Span, total: Duration) {
        if let Ok(mut live) = self.live.lock() {
            *live = Some(LiveBar { span, total });
        }
    }

    fn clear(&self) {
        if let Ok(mut live) = self.live.lock() {
            live.take();
        }
    }

    fn tick(&self, remaining: Duration) {
        if let Ok(live) = self.live.lock() {
            if let Some(bar) = live.as_ref() {
                spinner::report_countdown(&bar.span, bar.total, remaining);
            }
        }
    }
}

impl NoticeSink for ConsoleNotices {
    fn notify(&self, notice: Notice<'_>) {
        match notice {
            Notice::ProbeStarted { phase, timeout } => {
                let title = match phase {
                    Phase::ProbeFinal => "connectivity re-check",
                    _ => "connectivity check",
                };
                print::header(title, self.q_level);
                info!("1 packet per target, {} ms timeout", timeout.as_millis());
            }
            Notice::Probing(target) => {
                self.show(spinner::start_probe_spinner(&target.to_string()), Duration::ZERO);
            }
            Notice::TargetReachable(target) => {
                self.clear();
                success!("{} reachable (online).", target.to_string().bold());
            }
            Notice::TargetSilent(target) => {
                self.clear();
                warn!("{} did not respond. (Not final yet.)", target.to_string().bold());
            }
            Notice::AllTargetsDown => {
                error!("All targets failed to respond. Considered {}.", "OFFLINE".red().bold());
            }
            Notice::ToggleStarted { adapter } => {
                print::header(&format!("toggling '{adapter}' (1 cycle)"), self.q_level);
            }
            Notice::AdapterCommand { adapter, action } => {
                let verb = match action {
                    AdapterAction::Disable => "Disabling",
                    AdapterAction::Enable => "Enabling",
                };
                info!("{verb} '{}' ...", adapter.bold());
            }
            Notice::ToggleFailed(e) => {
                error!("{e}");
            }
            Notice::ToggleComplete { clean: true } => {
                success!("Adapter disable/enable cycle complete.");
            }
            Notice::ToggleComplete { clean: false } => {
                warn!("Toggle cycle finished with errors. Re-checking anyway.");
            }
            Notice::WaitStarted(total) => {
                info!("Waiting {} seconds before re-checking connectivity ...", total.as_secs());
                if !total.is_zero() {
                    self.show(spinner::start_countdown(total), total);
                }
            }
            Notice::Countdown { remaining } => self.tick(remaining),
            Notice::WaitComplete => {
                self.clear();
                success!("Wait complete.");
            }
            Notice::Launching { page } => {
                print::header("opening settings", self.q_level);
                info!("Launching {page} ...");
            }
            Notice::Launched => {
                success!("Settings window launched (if allowed by OS policy).");
            }
            Notice::LaunchFailed(e) => {
                warn!("{e}");
            }
            Notice::Finished(outcome) => match outcome {
                RecoveryOutcome::AlreadyOnline => info!("Already online; no toggle needed."),
                RecoveryOutcome::RecoveredAfterToggle => success!("Back online after toggle."),
                RecoveryOutcome::StillOffline => {
                    error!("Still offline after one toggle attempt.")
                }
            },
        }
    }
}
