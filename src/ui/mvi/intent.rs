//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents cover user actions (keystrokes), system events (submission
/// outcomes, timers), and navigation. They are processed by reducers to
/// produce new states.
pub trait Intent: Send + 'static {}
