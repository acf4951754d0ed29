// crates/infra/src/notifier.rs
use lab_catalog_ports::progress::RunNotifier;
use tracing::warn;

/// Progress on stdout, warnings through the logger.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl RunNotifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }
}
