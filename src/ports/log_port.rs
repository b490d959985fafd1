//! Log sink port.

/// Receives the interpreter's notices. Informational lines and recoverable
/// failures arrive on separate channels.
pub trait LogPort {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}
