//! Display utilities for the stockdash CLI.

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use stockdash_lib::{OutputFormat, RunSummary};

/// Report format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Html,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => Self::Html,
            Format::Json => Self::Json,
        }
    }
}

/// Creates the per-symbol progress bar, hidden in quiet mode.
///
/// The length is set once the symbol file has been read.
pub(crate) fn progress_bar(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} symbols {msg}",
    )
    .map(|style| style.progress_chars("=>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    let bar = ProgressBar::new(0);
    bar.set_style(style);
    bar
}

/// One-line summary shown when the progress bar finishes.
pub(crate) fn summary_message(summary: &RunSummary) -> String {
    if summary.skipped.is_empty() {
        format!("Charted {} symbols", summary.charted)
    } else {
        let skipped: Vec<_> = summary.skipped.iter().map(|t| t.as_str()).collect();
        format!(
            "Charted {} symbols ({} skipped: {})",
            summary.charted,
            skipped.len(),
            skipped.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdash_lib::Ticker;

    #[test]
    fn test_format_conversion() {
        assert_eq!(OutputFormat::from(Format::Html), OutputFormat::Html);
        assert_eq!(OutputFormat::from(Format::Json), OutputFormat::Json);
    }

    #[test]
    fn test_summary_message() {
        let mut summary = RunSummary {
            requested: 3,
            charted: 3,
            skipped: Vec::new(),
        };
        assert_eq!(summary_message(&summary), "Charted 3 symbols");

        summary.charted = 1;
        summary.skipped = vec![Ticker::new("abc").unwrap(), Ticker::new("xyz").unwrap()];
        assert_eq!(
            summary_message(&summary),
            "Charted 1 symbols (2 skipped: ABC, XYZ)"
        );
    }
}
