//! Log subscriber setup for the stockdash CLI.

use indicatif::ProgressBar;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Returns the default filter for a `-v` count.
///
/// Never quieter than `warn`: skipped symbols are reported at that level.
pub(crate) const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Stderr writer that hides the progress bar while a log line is printed.
#[derive(Debug, Clone)]
struct BarWriter {
    bar: ProgressBar,
}

impl Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bar.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Installs a stderr fmt subscriber that cooperates with `bar`.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub(crate) fn init(verbose: u8, bar: ProgressBar) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(move || BarWriter { bar: bar.clone() })
        .with_target(false)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(5), "trace");
    }

    #[test]
    fn test_default_filter_keeps_skip_warnings() {
        let filter = EnvFilter::new(default_level(0));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_bar_writer_writes_while_bar_is_active() {
        let bar = ProgressBar::hidden();
        bar.set_length(3);
        bar.inc(1);
        let mut writer = BarWriter { bar: bar.clone() };

        assert_eq!(writer.write(b"\n").unwrap(), 1);
        assert!(writer.flush().is_ok());
        assert_eq!(bar.position(), 1);
    }
}
