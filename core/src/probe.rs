use std::time::Duration;

use netrevive_common::network::target::ProbeTarget;
use netrevive_common::ports::{NoticeSink, Prober};
use netrevive_common::recovery::{Notice, ProbeReport};

/// Probes `targets` in order and stops at the first one that answers.
///
/// Targets after the first reachable one are never touched. When every target
/// stays silent, each one has been probed exactly once.
pub async fn probe_any(
    prober: &dyn Prober,
    targets: &[ProbeTarget],
    timeout: Duration,
    notices: &dyn NoticeSink,
) -> ProbeReport {
    let mut attempted: usize = 0;

    for target in targets {
        attempted += 1;
        notices.notify(Notice::Probing(target));

        if prober.probe(target, timeout).await {
            notices.notify(Notice::TargetReachable(target));
            return ProbeReport {
                reachable_via: Some(target.clone()),
                attempted,
            };
        }

        notices.notify(Notice::TargetSilent(target));
    }

    notices.notify(Notice::AllTargetsDown);
    ProbeReport {
        reachable_via: None,
        attempted,
    }
}
