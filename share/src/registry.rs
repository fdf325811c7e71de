//! The shared-state registry handle.

use crate::error::DuplicateListenerError;
use crate::identity::SubscriberId;
use crate::listener::Listener;
use crate::proxy::Proxy;
use crate::shared::RegistryShared;

use std::fmt;
use std::sync::Arc;

/// A keyed value cache paired with a per-key, multi-subscriber listener
/// table.
///
/// A `Registry` is an explicitly constructed handle over shared state:
/// cloning it is cheap and every clone observes the same cache and listener
/// table. It lives as long as any handle to it does; there is no global
/// instance. The value type `V` is fixed per registry, so callers needing
/// heterogeneous payloads use distinct registries or an enum of the payload
/// kinds they actually carry.
///
/// All operations are synchronous and non-blocking. Absent keys are never an
/// error: reads fall back, removals and notifications of nothing are no-ops.
/// The one programmer-error condition is registering two callbacks under the
/// same (key, subscriber) pair, surfaced by [`Registry::add_listener`].
pub struct Registry<V: Send + Sync> {
  pub(crate) shared: Arc<RegistryShared<V>>,
}

impl<V: Send + Sync> Registry<V> {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self {
      shared: Arc::new(RegistryShared::new()),
    }
  }

  /// Creates a [`Proxy`] bound to this registry under a freshly allocated
  /// subscriber identity.
  pub fn proxy(&self) -> Proxy<V> {
    Proxy::new(self.shared.clone())
  }

  /// Allocates a subscriber identity without constructing a proxy, for
  /// callers driving the registry-level listener operations directly.
  pub fn allocate_subscriber(&self) -> SubscriberId {
    self.shared.identities.next_id()
  }

  // --- Value cache ---

  /// Returns the cached value for `key`, or `fallback` when the key is
  /// absent. Never fails.
  pub fn get_or(&self, key: &str, fallback: V) -> V
  where
    V: Clone,
  {
    self.shared.get_or(key, fallback)
  }

  /// Returns the cached value for `key`, if present.
  pub fn get(&self, key: &str) -> Option<V>
  where
    V: Clone,
  {
    self.shared.get(key)
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.shared.contains_key(key)
  }

  /// Unconditionally inserts or overwrites the value under `key`.
  pub fn set(&self, key: impl Into<String>, value: V) {
    self.shared.set(key.into(), value);
  }

  /// Removes the value under `key`; a no-op when the key is absent.
  pub fn remove(&self, key: &str) {
    self.shared.remove(key);
  }

  // --- Listener table ---

  /// Registers `listener` under the (key, subscriber) pair.
  ///
  /// # Errors
  ///
  /// Returns [`DuplicateListenerError`] if that exact pair already holds a
  /// callback. The existing registration is not overwritten.
  pub fn add_listener(
    &self,
    key: impl Into<String>,
    subscriber: SubscriberId,
    listener: impl Listener<V> + 'static,
  ) -> Result<(), DuplicateListenerError> {
    self
      .shared
      .add_listener(key.into(), subscriber, Arc::new(listener))
  }

  /// Invokes the single callback registered at (key, subscriber) with
  /// `value`; a no-op when the key or the subscriber is absent.
  pub fn notify_one(&self, key: &str, subscriber: SubscriberId, value: &V) {
    self.shared.notify_one(key, subscriber, value);
  }

  /// Invokes every callback registered under `key`, in subscriber
  /// registration order; a no-op when the key has no listeners.
  pub fn notify_all(&self, key: &str, value: &V) {
    self.shared.notify_all(key, value);
  }

  /// Drops every subscriber's listener for `key`.
  pub fn remove_listeners_for_key(&self, key: &str) {
    self.shared.remove_listeners_for_key(key);
  }

  /// Drops every subscriber's listener for each key in `keys`; missing keys
  /// are skipped.
  pub fn remove_listeners_for_keys<S: AsRef<str>>(&self, keys: &[S]) {
    for key in keys {
      self.shared.remove_listeners_for_key(key.as_ref());
    }
  }

  /// Drops exactly the one (key, subscriber) entry; a no-op when absent.
  pub fn remove_listener(&self, key: &str, subscriber: SubscriberId) {
    self.shared.remove_listener(key, subscriber);
  }

  /// Drops the `subscriber` entry for each key in `keys` in sequence.
  pub fn remove_listener_for_keys<S: AsRef<str>>(&self, keys: &[S], subscriber: SubscriberId) {
    for key in keys {
      self.shared.remove_listener(key.as_ref(), subscriber);
    }
  }

  /// The number of listeners currently registered under `key`.
  pub fn listener_count(&self, key: &str) -> usize {
    self.shared.listener_count(key)
  }
}

impl<V: Send + Sync> Clone for Registry<V> {
  fn clone(&self) -> Self {
    Self {
      shared: self.shared.clone(),
    }
  }
}

impl<V: Send + Sync> Default for Registry<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V: Send + Sync> fmt::Debug for Registry<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Registry")
      .field("values", &self.shared.values.len())
      .field("keys_with_listeners", &self.shared.listeners.read().len())
      .finish()
  }
}
