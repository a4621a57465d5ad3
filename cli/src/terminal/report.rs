use colored::*;
use netrevive_common::recovery::{Phase, RecoveryOutcome, RecoveryReport};

use crate::mprint;
use crate::terminal::{colors, print};

const KEYS: [&str; 5] = ["Outcome", "Phases", "Answered by", "Toggle errors", "Settings"];

/// Summary block printed after every run.
pub fn print_report(report: &RecoveryReport, q_level: u8) {
    if q_level > 1 {
        print::print_status(outcome_label(report.outcome).to_string());
        return;
    }

    mprint!();
    print::header("summary", q_level);
    print::set_key_width(KEYS);

    print::aligned_line(KEYS[0], outcome_label(report.outcome));
    print::aligned_line(KEYS[1], phase_trail(&report.phases));

    let answered: ColoredString = report
        .final_probe
        .as_ref()
        .unwrap_or(&report.initial_probe)
        .reachable_via
        .as_ref()
        .map(|target| target.to_string().color(colors::TARGET_ADDR))
        .unwrap_or_else(|| "nobody".color(colors::OFFLINE));
    print::aligned_line(KEYS[2], answered);

    if report.toggled() {
        let errors: ColoredString = match report.toggle_errors.len() {
            0 => "none".color(colors::ONLINE),
            n => n.to_string().color(colors::OFFLINE),
        };
        print::aligned_line(KEYS[3], errors);
    }

    let settings: ColoredString = if report.launched() {
        "opened".color(colors::ONLINE)
    } else if report.launch_error.is_some() {
        "failed to open".color(colors::ACCENT)
    } else {
        "not opened".color(colors::SEPARATOR)
    };
    print::aligned_line(KEYS[4], settings);

    print::fat_separator();
}

fn outcome_label(outcome: RecoveryOutcome) -> ColoredString {
    match outcome {
        RecoveryOutcome::AlreadyOnline => "already online".color(colors::ONLINE).bold(),
        RecoveryOutcome::RecoveredAfterToggle => {
            "recovered after toggle".color(colors::ONLINE).bold()
        }
        RecoveryOutcome::StillOffline => "still offline".color(colors::OFFLINE).bold(),
    }
}

fn phase_trail(phases: &[Phase]) -> String {
    phases
        .iter()
        .map(|phase| match phase {
            Phase::ProbeInitial => "check",
            Phase::Toggling => "toggle",
            Phase::Waiting => "wait",
            Phase::ProbeFinal => "re-check",
            Phase::Launching => "launch",
        })
        .collect::<Vec<&str>>()
        .join(" → ")
}
