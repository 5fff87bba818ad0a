use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "OurDapur -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "OurDapur -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "OurDapur -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "OurDapur -- ", "{}", message);
    }
}
