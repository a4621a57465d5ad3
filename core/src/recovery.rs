//! # Connectivity Recovery Service
//!
//! Implements the one use case of the tool: get back online with a single adapter
//! toggle, if a toggle is needed at all.
//!
//! A run moves through these states and never revisits one:
//!
//! ```text
//! ProbeInitial ─┬─ online ──────────────────────────────────────────► AlreadyOnline
//!               └─ offline ─► Toggling ─► Waiting ─► ProbeFinal ─┬──► RecoveredAfterToggle (+ launch)
//!                                                                └──► StillOffline
//! ```
//!
//! Looping is the caller's business: every call to [`RecoveryFlow::run`] starts
//! from scratch and issues at most one disable/enable pair.

use std::sync::Arc;
use std::time::Duration;

use netrevive_common::config::Config;
use netrevive_common::error::{AdapterAction, LaunchError, ToggleError};
use netrevive_common::network::target::ProbeTarget;
use netrevive_common::ports::{AdapterController, NoticeSink, Prober, SettingsLauncher};
use netrevive_common::recovery::{Notice, Phase, ProbeReport, RecoveryOutcome, RecoveryReport};
use tokio::time;
use tracing::debug;

use crate::probe::probe_any;
use crate::system::{MsSettingsLauncher, NetshAdapter, PingProber};

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// The fixed values a run works with, captured once at construction.
#[derive(Clone, Debug)]
pub struct RecoverySettings {
    pub targets: Vec<ProbeTarget>,
    pub probe_timeout: Duration,
    pub adapter: String,
    pub toggle_pause: Duration,
    pub post_toggle_wait: Duration,
    pub settings_page: String,
    pub launch_settings: bool,
}

impl From<&Config> for RecoverySettings {
    fn from(cfg: &Config) -> Self {
        Self {
            targets: cfg.targets.clone(),
            probe_timeout: cfg.probe_timeout,
            adapter: cfg.adapter.clone(),
            toggle_pause: cfg.toggle_pause,
            post_toggle_wait: cfg.post_toggle_wait,
            settings_page: cfg.settings_page.clone(),
            launch_settings: cfg.launch_settings,
        }
    }
}

/// Application Service for connectivity recovery.
///
/// Orchestrates the run by:
/// 1. delegating reachability checks to the [`Prober`].
/// 2. cycling the adapter through the [`AdapterController`] when offline.
/// 3. opening the settings page through the [`SettingsLauncher`] once recovered.
pub struct RecoveryFlow {
    settings: RecoverySettings,
    prober: Box<dyn Prober>,
    adapter: Box<dyn AdapterController>,
    launcher: Box<dyn SettingsLauncher>,
    notices: Arc<dyn NoticeSink>,
}

impl RecoveryFlow {
    pub fn new(
        settings: RecoverySettings,
        prober: Box<dyn Prober>,
        adapter: Box<dyn AdapterController>,
        launcher: Box<dyn SettingsLauncher>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            settings,
            prober,
            adapter,
            launcher,
            notices,
        }
    }

    /// Wires the flow to the real `ping`, `netsh` and settings launcher.
    pub fn with_system_adapters(cfg: &Config, notices: Arc<dyn NoticeSink>) -> Self {
        Self::new(
            RecoverySettings::from(cfg),
            Box::new(PingProber::native()),
            Box::new(NetshAdapter),
            Box::new(MsSettingsLauncher),
            notices,
        )
    }

    /// Executes one full recovery run.
    ///
    /// Never fails: a silent network is an outcome, and toggle or launch errors
    /// are reported through the notice sink and recorded in the report.
    pub async fn run(&self) -> RecoveryReport {
        let mut phases: Vec<Phase> = vec![Phase::ProbeInitial];
        let initial_probe: ProbeReport = self.probe(Phase::ProbeInitial).await;

        if initial_probe.is_reachable() {
            return self.finish(RecoveryReport {
                outcome: RecoveryOutcome::AlreadyOnline,
                phases,
                initial_probe,
                final_probe: None,
                toggle_errors: Vec::new(),
                launch_error: None,
            });
        }

        phases.push(Phase::Toggling);
        let toggle_errors: Vec<ToggleError> = self.toggle_once().await;

        phases.push(Phase::Waiting);
        self.wait().await;

        phases.push(Phase::ProbeFinal);
        let final_probe: ProbeReport = self.probe(Phase::ProbeFinal).await;

        if !final_probe.is_reachable() {
            return self.finish(RecoveryReport {
                outcome: RecoveryOutcome::StillOffline,
                phases,
                initial_probe,
                final_probe: Some(final_probe),
                toggle_errors,
                launch_error: None,
            });
        }

        let mut launch_error: Option<LaunchError> = None;
        if self.settings.launch_settings {
            phases.push(Phase::Launching);
            launch_error = self.launch().await.err();
        }

        self.finish(RecoveryReport {
            outcome: RecoveryOutcome::RecoveredAfterToggle,
            phases,
            initial_probe,
            final_probe: Some(final_probe),
            toggle_errors,
            launch_error,
        })
    }

    /// Runs only the reachability check, with no side effects on the adapter.
    pub async fn check(&self) -> ProbeReport {
        self.probe(Phase::ProbeInitial).await
    }

    async fn probe(&self, phase: Phase) -> ProbeReport {
        self.notices.notify(Notice::ProbeStarted {
            phase,
            timeout: self.settings.probe_timeout,
        });
        probe_any(
            self.prober.as_ref(),
            &self.settings.targets,
            self.settings.probe_timeout,
            self.notices.as_ref(),
        )
        .await
    }

    /// Disables then enables the adapter, exactly once.
    ///
    /// Enable is issued even if disable failed so the flow never leaves the
    /// adapter down.
    async fn toggle_once(&self) -> Vec<ToggleError> {
        let adapter: &str = &self.settings.adapter;
        self.notices.notify(Notice::ToggleStarted { adapter });

        let mut errors: Vec<ToggleError> = Vec::new();

        if let Err(e) = self.issue(AdapterAction::Disable).await {
            errors.push(e);
        }

        time::sleep(self.settings.toggle_pause).await;

        if let Err(e) = self.issue(AdapterAction::Enable).await {
            errors.push(e);
        }

        self.notices.notify(Notice::ToggleComplete {
            clean: errors.is_empty(),
        });
        errors
    }

    async fn issue(&self, action: AdapterAction) -> Result<(), ToggleError> {
        let adapter: &str = &self.settings.adapter;
        self.notices.notify(Notice::AdapterCommand { adapter, action });

        let result = match action {
            AdapterAction::Disable => self.adapter.disable(adapter).await,
            AdapterAction::Enable => self.adapter.enable(adapter).await,
        };

        if let Err(e) = &result {
            debug!("{action} of '{adapter}' failed: {e:?}");
            self.notices.notify(Notice::ToggleFailed(e));
        }
        result
    }

    /// Fixed pause after the toggle, ticking down once per second.
    async fn wait(&self) {
        let mut remaining: Duration = self.settings.post_toggle_wait;
        self.notices.notify(Notice::WaitStarted(remaining));

        while !remaining.is_zero() {
            self.notices.notify(Notice::Countdown { remaining });
            let step: Duration = remaining.min(COUNTDOWN_STEP);
            time::sleep(step).await;
            remaining -= step;
        }

        self.notices.notify(Notice::WaitComplete);
    }

    async fn launch(&self) -> Result<(), LaunchError> {
        let page: &str = &self.settings.settings_page;
        self.notices.notify(Notice::Launching { page });

        match self.launcher.open(page).await {
            Ok(()) => {
                self.notices.notify(Notice::Launched);
                Ok(())
            }
            Err(e) => {
                self.notices.notify(Notice::LaunchFailed(&e));
                Err(e)
            }
        }
    }

    fn finish(&self, report: RecoveryReport) -> RecoveryReport {
        self.notices.notify(Notice::Finished(report.outcome));
        report
    }
}
