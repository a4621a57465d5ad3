use std::process::ExitCode;
use std::sync::Arc;

use colored::*;
use netrevive_common::config::Config;
use netrevive_common::recovery::ProbeReport;
use netrevive_common::success;
use netrevive_core::recovery::RecoveryFlow;
use tracing::error;

use crate::terminal::{colors, notices::ConsoleNotices, print};

/// Connectivity check only. Needs no elevation and never touches the adapter.
pub async fn check(cfg: &Config) -> anyhow::Result<ExitCode> {
    let flow = RecoveryFlow::with_system_adapters(cfg, Arc::new(ConsoleNotices::new(cfg.quiet)));

    print_targets(cfg);
    let report: ProbeReport = flow.check().await;

    match &report.reachable_via {
        Some(target) => {
            success!("Online, {} answered.", target.to_string().bold());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            error!("Offline, none of {} target(s) answered.", report.attempted);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_targets(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    for (idx, target) in cfg.targets.iter().enumerate() {
        print::tree_head(idx, &target.to_string());
        let kind: ColoredString = if target.is_literal() {
            "address".color(colors::TEXT_DEFAULT)
        } else {
            "host name (needs DNS)".color(colors::ACCENT)
        };
        print::as_tree_one_level(vec![("Kind".to_string(), kind)]);
    }
}
