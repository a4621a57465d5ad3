use std::time::Duration;

use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICK_STRINGS)
}

fn countdown_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} [{bar:30.green/black}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICK_STRINGS)
        .progress_chars("█▓░")
}

/// Spinner shown while a single ping is in flight. Dropping the span removes it.
pub fn start_probe_spinner(target: &str) -> Span {
    let span = info_span!("probe", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!("Pinging {} ...", target.bold()));
    span.pb_start();
    span
}

/// Bar counting whole seconds until `total` has passed.
pub fn start_countdown(total: Duration) -> Span {
    let span = info_span!("countdown", indicatif.pb_show = true);
    span.pb_set_style(&countdown_style());
    span.pb_set_length(total.as_secs().max(1));
    span.pb_set_position(0);
    span.pb_set_message(&countdown_message(total));
    span.pb_start();
    span
}

pub fn report_countdown(span: &Span, total: Duration, remaining: Duration) {
    span.pb_set_position(total.saturating_sub(remaining).as_secs());
    span.pb_set_message(&countdown_message(remaining));
}

fn countdown_message(remaining: Duration) -> String {
    format!(
        "Re-checking in {}",
        format!("{:2}s", remaining.as_secs()).yellow().bold()
    )
}
