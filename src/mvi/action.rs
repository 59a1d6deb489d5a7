//! Base trait for actions dispatched to reducers.

/// Marker trait for action enums.
///
/// Actions are plain values that describe something that happened:
/// - Phase signals from an async operation (begin, success, failure)
/// - User commands (increment, reset)
///
/// Every action names itself so the store can log what it applied
/// without requiring `Debug` on potentially large payloads.
pub trait Action: Send + 'static {
    /// Short, stable name of the action variant.
    fn kind(&self) -> &'static str;
}
