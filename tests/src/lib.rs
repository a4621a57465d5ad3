//! Deterministic stand-ins for the recovery flow's collaborators.
//!
//! Each double keeps its call log behind an `Arc`, so a test can hand the
//! double to a `RecoveryFlow` and still inspect what happened afterwards.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use netrevive_common::error::{AdapterAction, LaunchError, ToggleError};
use netrevive_common::network::target::ProbeTarget;
use netrevive_common::ports::{AdapterController, NoticeSink, Prober, SettingsLauncher};
use netrevive_common::recovery::Notice;
use tokio::time::Instant;

/// Answers each probe pass from a script of "which targets are up".
///
/// A pass starts at the first target of the list; a target missing from the
/// current pass's set stays silent. Once the script runs out every target is down.
#[derive(Clone)]
pub struct ScriptedProber {
    first: ProbeTarget,
    passes: Arc<Mutex<VecDeque<HashSet<ProbeTarget>>>>,
    current: Arc<Mutex<HashSet<ProbeTarget>>>,
    pub calls: Arc<Mutex<Vec<(ProbeTarget, Instant)>>>,
}

impl ScriptedProber {
    pub fn new(targets: &[ProbeTarget], passes: Vec<Vec<ProbeTarget>>) -> Self {
        Self {
            first: targets[0].clone(),
            passes: Arc::new(Mutex::new(
                passes.into_iter().map(|up| up.into_iter().collect()).collect(),
            )),
            current: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_log(&self) -> Vec<(ProbeTarget, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn probed(&self) -> Vec<ProbeTarget> {
        self.call_log().into_iter().map(|(target, _)| target).collect()
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, target: &ProbeTarget, _timeout: Duration) -> bool {
        self.calls.lock().unwrap().push((target.clone(), Instant::now()));

        let mut current = self.current.lock().unwrap();
        if *target == self.first {
            *current = self.passes.lock().unwrap().pop_front().unwrap_or_default();
        }
        current.contains(target)
    }
}

/// Records every admin-state change; optionally fails all of them.
#[derive(Clone, Default)]
pub struct RecordingAdapter {
    pub fail: bool,
    pub actions: Arc<Mutex<Vec<(String, AdapterAction, Instant)>>>,
}

impl RecordingAdapter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn log(&self) -> Vec<(String, AdapterAction, Instant)> {
        self.actions.lock().unwrap().clone()
    }

    pub fn action_kinds(&self) -> Vec<AdapterAction> {
        self.log().into_iter().map(|(_, action, _)| action).collect()
    }
}

#[async_trait]
impl AdapterController for RecordingAdapter {
    async fn set_admin_state(
        &self,
        adapter: &str,
        action: AdapterAction,
    ) -> Result<(), ToggleError> {
        self.actions
            .lock()
            .unwrap()
            .push((adapter.to_string(), action, Instant::now()));

        if self.fail {
            return Err(ToggleError::CommandFailed {
                action,
                adapter: adapter.to_string(),
                code: Some(1),
                output: "No more data is available.".to_string(),
            });
        }
        Ok(())
    }
}

/// Counts settings launches.
#[derive(Clone, Default)]
pub struct CountingLauncher {
    pub pages: Arc<Mutex<Vec<String>>>,
}

impl CountingLauncher {
    pub fn count(&self) -> usize {
        self.pages.lock().unwrap().len()
    }
}

#[async_trait]
impl SettingsLauncher for CountingLauncher {
    async fn open(&self, page: &str) -> Result<(), LaunchError> {
        self.pages.lock().unwrap().push(page.to_string());
        Ok(())
    }
}

/// Keeps a debug rendering of every notice, in order.
#[derive(Default)]
pub struct CollectedNotices {
    pub lines: Mutex<Vec<String>>,
}

impl CollectedNotices {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl NoticeSink for CollectedNotices {
    fn notify(&self, notice: Notice<'_>) {
        self.lines.lock().unwrap().push(format!("{notice:?}"));
    }
}
