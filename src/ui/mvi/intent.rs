//! Intents: the events a reducer understands.

/// Marker trait for intents.
///
/// An intent is either something the user did (typed a key, pressed Enter)
/// or something the system reports back (a request finished).
pub trait Intent: Send + 'static {}
