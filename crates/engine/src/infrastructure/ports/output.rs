//! Output port: an append-only line sink.

/// Receives one rendered line per action, in dispatch order.
///
/// Writing cannot fail from the caller's point of view; adapters deal with
/// their own I/O errors.
#[cfg_attr(test, mockall::automock)]
pub trait OutputPort: Send + Sync {
    fn write_line(&self, line: &str);
}
