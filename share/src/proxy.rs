//! Subscriber-scoped access to a registry.

use crate::error::DuplicateListenerError;
use crate::identity::SubscriberId;
use crate::listener::Listener;
use crate::registry::Registry;
use crate::shared::RegistryShared;

use std::fmt;
use std::sync::Arc;

/// A lightweight handle over a [`Registry`] carrying one unique subscriber
/// identity.
///
/// The identity is allocated once at construction and never reused for the
/// registry's lifetime. Listener operations addressed through the proxy pin
/// that identity, so each proxy's registrations are independent entries in
/// the listener table and can be torn down in bulk without affecting other
/// proxies listening on the same keys.
///
/// Cache access, [`Proxy::notify_all`], and the `remove_listeners_for_*`
/// operations act globally rather than being scoped to the proxy: a proxy
/// can register and clean up only its own subscriptions, but can still
/// broadcast or clear a whole key when that is the desired effect.
///
/// Dropping a proxy does not remove its registrations; teardown is explicit
/// via [`Proxy::remove_listener`] or [`Proxy::remove_listener_for_keys`].
pub struct Proxy<V: Send + Sync> {
  shared: Arc<RegistryShared<V>>,
  subscriber: SubscriberId,
}

impl<V: Send + Sync> Proxy<V> {
  pub(crate) fn new(shared: Arc<RegistryShared<V>>) -> Self {
    let subscriber = shared.identities.next_id();
    Self { shared, subscriber }
  }

  /// The identity scoping this proxy's listener registrations.
  pub fn subscriber_id(&self) -> SubscriberId {
    self.subscriber
  }

  /// Returns a plain registry handle over the same shared state. This is a
  /// zero-cost conversion.
  pub fn registry(&self) -> Registry<V> {
    Registry {
      shared: self.shared.clone(),
    }
  }

  // --- Value cache (global, not subscriber-scoped) ---

  /// Returns the cached value for `key`, or `fallback` when absent.
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

  // --- Listener table, pinned to this proxy's identity ---

  /// Registers `listener` under (key, this proxy's identity).
  ///
  /// # Errors
  ///
  /// Returns [`DuplicateListenerError`] if this proxy already listens on
  /// `key` and has not unsubscribed.
  pub fn add_listener(
    &self,
    key: impl Into<String>,
    listener: impl Listener<V> + 'static,
  ) -> Result<(), DuplicateListenerError> {
    self
      .shared
      .add_listener(key.into(), self.subscriber, Arc::new(listener))
  }

  /// Invokes this proxy's own callback on `key`, if registered.
  pub fn notify_one(&self, key: &str, value: &V) {
    self.shared.notify_one(key, self.subscriber, value);
  }

  /// Invokes every callback registered under `key`, in registration order.
  pub fn notify_all(&self, key: &str, value: &V) {
    self.shared.notify_all(key, value);
  }

  /// Drops this proxy's own listener on `key`; a no-op when absent.
  pub fn remove_listener(&self, key: &str) {
    self.shared.remove_listener(key, self.subscriber);
  }

  /// Drops this proxy's own listener on each key in `keys` in sequence.
  pub fn remove_listener_for_keys<S: AsRef<str>>(&self, keys: &[S]) {
    for key in keys {
      self.shared.remove_listener(key.as_ref(), self.subscriber);
    }
  }

  // --- Listener table, global ---

  /// Drops every subscriber's listener for `key`, this proxy's included.
  pub fn remove_listeners_for_key(&self, key: &str) {
    self.shared.remove_listeners_for_key(key);
  }

  /// Drops every subscriber's listener for each key in `keys`.
  pub fn remove_listeners_for_keys<S: AsRef<str>>(&self, keys: &[S]) {
    for key in keys {
      self.shared.remove_listeners_for_key(key.as_ref());
    }
  }

  /// The number of listeners currently registered under `key`.
  pub fn listener_count(&self, key: &str) -> usize {
    self.shared.listener_count(key)
  }
}

impl<V: Send + Sync> fmt::Debug for Proxy<V> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Proxy")
      .field("subscriber", &self.subscriber)
      .finish()
  }
}
