use std::process::ExitCode;
use std::sync::Arc;

use netrevive_common::config::Config;
use netrevive_common::recovery::RecoveryReport;
use netrevive_core::recovery::RecoveryFlow;

use crate::terminal::{notices::ConsoleNotices, print, report};

/// One recovery run, then exit. Exit code 1 means still offline.
pub async fn run(cfg: &Config) -> anyhow::Result<ExitCode> {
    let flow = RecoveryFlow::with_system_adapters(cfg, Arc::new(ConsoleNotices::new(cfg.quiet)));

    print::header("recovery: start", cfg.quiet);
    let report: RecoveryReport = flow.run().await;
    report::print_report(&report, cfg.quiet);

    if report.outcome.is_online() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
