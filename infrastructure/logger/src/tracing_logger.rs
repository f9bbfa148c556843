use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by the `tracing` macros. Every event is emitted under
/// the `warehouse` target so `RUST_LOG=warehouse=debug` isolates use-case logs.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "warehouse", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "warehouse", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "warehouse", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "warehouse", "{}", message);
    }
}
