#![cfg(test)]
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use netrevive_common::config::Config;
use netrevive_common::error::{AdapterAction, ToggleError};
use netrevive_common::network::target::ProbeTarget;
use netrevive_common::recovery::{Phase, RecoveryOutcome, RecoveryReport};
use netrevive_core::recovery::{RecoveryFlow, RecoverySettings};
use netrevive_integration_tests::{
    CollectedNotices, CountingLauncher, RecordingAdapter, ScriptedProber,
};

fn target(s: &str) -> ProbeTarget {
    ProbeTarget::from_str(s).unwrap()
}

/// 1.1.1.1 then 8.8.8.8, toggling "Wi-Fi", 5 second wait: the stock setup.
fn stock_config() -> Config {
    Config::default()
}

struct Harness {
    flow: RecoveryFlow,
    prober: ScriptedProber,
    adapter: RecordingAdapter,
    launcher: CountingLauncher,
    notices: Arc<CollectedNotices>,
}

fn harness(cfg: &Config, passes: Vec<Vec<ProbeTarget>>, adapter: RecordingAdapter) -> Harness {
    let prober = ScriptedProber::new(&cfg.targets, passes);
    let launcher = CountingLauncher::default();
    let notices = Arc::new(CollectedNotices::default());

    let flow = RecoveryFlow::new(
        RecoverySettings::from(cfg),
        Box::new(prober.clone()),
        Box::new(adapter.clone()),
        Box::new(launcher.clone()),
        notices.clone(),
    );

    Harness {
        flow,
        prober,
        adapter,
        launcher,
        notices,
    }
}

#[tokio::test(start_paused = true)]
async fn online_first_time_never_toggles() {
    let cfg = stock_config();
    let h = harness(&cfg, vec![vec![target("1.1.1.1")]], RecordingAdapter::default());

    let report: RecoveryReport = h.flow.run().await;

    assert_eq!(report.outcome, RecoveryOutcome::AlreadyOnline);
    assert_eq!(report.phases, vec![Phase::ProbeInitial]);
    assert!(h.adapter.log().is_empty(), "adapter must not be touched");
    assert_eq!(h.launcher.count(), 0);
    assert_eq!(h.prober.probed(), vec![target("1.1.1.1")]);
    assert!(report.final_probe.is_none());
}

#[tokio::test(start_paused = true)]
async fn second_target_answering_counts_as_online() {
    let cfg = stock_config();
    let h = harness(&cfg, vec![vec![target("8.8.8.8")]], RecordingAdapter::default());

    let report = h.flow.run().await;

    assert_eq!(report.outcome, RecoveryOutcome::AlreadyOnline);
    assert_eq!(report.initial_probe.reachable_via, Some(target("8.8.8.8")));
    assert_eq!(report.initial_probe.attempted, 2);
    assert!(h.adapter.log().is_empty());
}

/// targets = ["1.1.1.1","8.8.8.8"], both fail, toggle, wait 5 s, 1.1.1.1 answers.
#[tokio::test(start_paused = true)]
async fn recovers_after_single_toggle_and_launches_once() {
    let cfg = stock_config();
    let h = harness(
        &cfg,
        vec![vec![], vec![target("1.1.1.1")]],
        RecordingAdapter::default(),
    );

    let report = h.flow.run().await;

    assert_eq!(report.outcome, RecoveryOutcome::RecoveredAfterToggle);
    assert_eq!(
        report.phases,
        vec![
            Phase::ProbeInitial,
            Phase::Toggling,
            Phase::Waiting,
            Phase::ProbeFinal,
            Phase::Launching
        ]
    );

    // Exactly one disable+enable pair, on the configured adapter.
    let log = h.adapter.log();
    assert_eq!(
        h.adapter.action_kinds(),
        vec![AdapterAction::Disable, AdapterAction::Enable]
    );
    assert!(log.iter().all(|(name, _, _)| name == "Wi-Fi"));
    assert!(log[1].2 - log[0].2 >= cfg.toggle_pause);

    // The full wait elapses between enabling and the second probe.
    let calls = h.prober.call_log();
    assert_eq!(
        h.prober.probed(),
        vec![target("1.1.1.1"), target("8.8.8.8"), target("1.1.1.1")]
    );
    let enabled_at = log[1].2;
    let reprobed_at = calls[2].1;
    assert!(
        reprobed_at - enabled_at >= cfg.post_toggle_wait,
        "re-probe after {:?}, expected at least {:?}",
        reprobed_at - enabled_at,
        cfg.post_toggle_wait
    );

    assert_eq!(h.launcher.count(), 1);
    assert_eq!(
        h.launcher.pages.lock().unwrap()[0],
        "ms-settings:network-mobilehotspot"
    );
    assert!(report.launched());
    assert!(report.toggle_errors.is_empty());
}

#[tokio::test(start_paused = true)]
async fn still_offline_after_one_toggle_gives_up() {
    let cfg = stock_config();
    let h = harness(&cfg, vec![vec![], vec![]], RecordingAdapter::default());

    let report = h.flow.run().await;

    assert_eq!(report.outcome, RecoveryOutcome::StillOffline);
    assert_eq!(
        h.adapter.action_kinds(),
        vec![AdapterAction::Disable, AdapterAction::Enable]
    );
    assert_eq!(h.launcher.count(), 0);

    // Each pass probes every target exactly once.
    assert_eq!(
        h.prober.probed(),
        vec![
            target("1.1.1.1"),
            target("8.8.8.8"),
            target("1.1.1.1"),
            target("8.8.8.8")
        ]
    );
    assert_eq!(report.final_probe.map(|p| p.attempted), Some(2));
}

#[tokio::test(start_paused = true)]
async fn repeated_runs_are_independent() {
    let cfg = stock_config();
    // Two runs, each: offline, then back after the toggle.
    let h = harness(
        &cfg,
        vec![
            vec![],
            vec![target("1.1.1.1")],
            vec![],
            vec![target("1.1.1.1")],
        ],
        RecordingAdapter::default(),
    );

    let first = h.flow.run().await;
    assert_eq!(h.adapter.log().len(), 2);

    let second = h.flow.run().await;
    assert_eq!(h.adapter.log().len(), 4);

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.phases, second.phases);
    assert_eq!(h.launcher.count(), 2);
}

#[tokio::test(start_paused = true)]
async fn toggle_errors_do_not_stop_the_recheck() {
    let cfg = stock_config();
    let h = harness(
        &cfg,
        vec![vec![], vec![target("8.8.8.8")]],
        RecordingAdapter::failing(),
    );

    let report = h.flow.run().await;

    // The toggle "had no effect", yet the scripted network came back anyway.
    assert_eq!(report.outcome, RecoveryOutcome::RecoveredAfterToggle);
    assert_eq!(
        h.adapter.action_kinds(),
        vec![AdapterAction::Disable, AdapterAction::Enable]
    );
    assert_eq!(report.toggle_errors.len(), 2);
    assert!(matches!(
        report.toggle_errors[0],
        ToggleError::CommandFailed {
            action: AdapterAction::Disable,
            ..
        }
    ));

    let lines = h.notices.lines();
    assert_eq!(
        lines.iter().filter(|l| l.starts_with("ToggleFailed")).count(),
        2
    );
    assert!(lines.iter().any(|l| l == "ToggleComplete { clean: false }"));
    assert!(lines.iter().any(|l| l == "WaitComplete"));
}

#[tokio::test(start_paused = true)]
async fn countdown_ticks_once_per_second() {
    let cfg = stock_config();
    let h = harness(&cfg, vec![vec![], vec![]], RecordingAdapter::default());

    h.flow.run().await;

    let ticks: Vec<String> = h
        .notices
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("Countdown"))
        .collect();
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0], "Countdown { remaining: 5s }");
    assert_eq!(ticks[4], "Countdown { remaining: 1s }");

    let last = h.notices.lines().last().cloned();
    assert_eq!(last.as_deref(), Some("Finished(StillOffline)"));
}

#[tokio::test(start_paused = true)]
async fn custom_settings_are_honored() {
    let cfg = Config {
        targets: vec![target("9.9.9.9"), target("dns.google")],
        adapter: "Ethernet 2".to_string(),
        post_toggle_wait: Duration::from_secs(12),
        launch_settings: false,
        ..Config::default()
    };
    let h = harness(
        &cfg,
        vec![vec![], vec![target("dns.google")]],
        RecordingAdapter::default(),
    );

    let report = h.flow.run().await;

    assert_eq!(report.outcome, RecoveryOutcome::RecoveredAfterToggle);
    assert!(h.adapter.log().iter().all(|(name, _, _)| name == "Ethernet 2"));
    assert_eq!(h.launcher.count(), 0);

    let calls = h.prober.call_log();
    let enabled_at = h.adapter.log()[1].2;
    assert!(calls[2].1 - enabled_at >= Duration::from_secs(12));
}
