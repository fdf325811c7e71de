use crate::identity::SubscriberId;
use std::fmt;

/// Error returned by `add_listener` when the exact (key, subscriber) pair
/// already holds a callback.
///
/// This signals a double subscription in the calling layer, typically the
/// same proxy subscribing twice to the same key without unsubscribing first.
/// The existing registration is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateListenerError {
  /// The key the registration was attempted under.
  pub key: String,
  /// The subscriber that already occupies the slot.
  pub subscriber: SubscriberId,
}

impl fmt::Display for DuplicateListenerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "a listener is already registered under key '{}' for {}",
      self.key, self.subscriber
    )
  }
}

impl std::error::Error for DuplicateListenerError {}
