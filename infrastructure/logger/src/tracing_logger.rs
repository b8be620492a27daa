use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "nutrition_scanner";

/// Forwards domain log calls to `tracing` under a single target, so
/// `RUST_LOG=nutrition_scanner=debug` surfaces extraction diagnostics.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
