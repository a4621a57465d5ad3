use std::sync::Arc;

use netrevive_common::config::Config;
use netrevive_core::recovery::RecoveryFlow;
use tracing::{info, warn};

use crate::mprint;
use crate::terminal::input::{self, MenuChoice};
use crate::terminal::{notices::ConsoleNotices, print, report};

/// Run-again-or-exit loop around the recovery flow.
pub async fn menu(cfg: &Config) -> anyhow::Result<()> {
    let flow = RecoveryFlow::with_system_adapters(cfg, Arc::new(ConsoleNotices::new(cfg.quiet)));
    menu_loop(&flow, cfg.quiet, || input::read_choice("Select option")).await
}

/// Every run is independent; invalid input only re-prompts.
///
/// `next` yields one raw answer per prompt, `None` once input is closed.
pub async fn menu_loop(
    flow: &RecoveryFlow,
    q_level: u8,
    mut next: impl FnMut() -> anyhow::Result<Option<String>>,
) -> anyhow::Result<()> {
    loop {
        print::header("menu", q_level);
        print::menu_option('R', "Run now");
        print::menu_option('E', "Exit");
        mprint!();

        let Some(raw) = next()? else {
            info!("Input closed. Exiting.");
            return Ok(());
        };

        match raw.parse::<MenuChoice>() {
            Ok(MenuChoice::Run) => {
                print::header("recovery: start", q_level);
                let report = flow.run().await;
                report::print_report(&report, q_level);
            }
            Ok(MenuChoice::Exit) => {
                info!("Exiting. Goodbye.");
                return Ok(());
            }
            Err(_) => warn!("Invalid choice. Please enter 'R' or 'E'."),
        }
    }
}
