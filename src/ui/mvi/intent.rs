//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (focus movement) or follow-ups to a
/// navigation change (the visible screen was replaced).
pub trait Intent: Send + 'static {}
