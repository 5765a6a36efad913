//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow the pipeline to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunResult;
use crate::core::LocaleStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

/// Print the run summary to stdout.
pub fn print(result: &RunResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the run summary to a custom writer.
pub fn print_to<W: Write>(result: &RunResult, writer: &mut W) {
    if result.locales.is_empty() {
        print_no_locales_to(writer);
    }
    for stats in &result.locales {
        print_locale_to(stats, writer);
    }
    print_written_to(result, writer);
}

fn print_no_locales_to<W: Write>(writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} No locales defined in the project configuration.",
        "warning:".bold().yellow()
    );
}

fn print_locale_to<W: Write>(stats: &LocaleStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Extracting strings for locale: {}.",
        stats.locale.bold()
    );
    let _ = writeln!(
        writer,
        "  {} {} extracted from {} {}",
        stats.strings,
        plural(stats.strings, "string", "strings"),
        stats.files,
        plural(stats.files, "file", "files"),
    );
}

fn print_written_to<W: Write>(result: &RunResult, writer: &mut W) {
    if result.written.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            "note:".bold().cyan(),
            format!(
                "No experiment has a complete translation besides {} - nothing written",
                result.reference_locale
            )
            .yellow()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} of {} {} ({} reference {})",
            result.written.len(),
            result.experiment_count,
            plural(result.experiment_count, "experiment", "experiments"),
            result.reference_files,
            plural(result.reference_files, "file", "files"),
        )
        .green()
    );

    for written in &result.written {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            written.experiment.bold(),
            "->".dimmed(),
            written.complete_locales.join(", ")
        );
    }
}
