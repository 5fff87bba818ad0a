/// Logging port for the domain and application layers.
/// Adapters live in the infrastructure workspace members.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
