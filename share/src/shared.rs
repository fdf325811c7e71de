//! Crate-internal state shared by `Registry` and `Proxy` handles.

use crate::error::DuplicateListenerError;
use crate::identity::{IdentityAllocator, SubscriberId};
use crate::listener::SharedListener;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use dashmap::DashMap;
use log::{debug, trace, warn};
use parking_lot::RwLock;

/// One registration in the listener table. Entries for a key are kept in
/// registration order, which fixes the invocation order of `notify_all`.
pub(crate) struct ListenerEntry<V> {
  pub(crate) subscriber: SubscriberId,
  pub(crate) callback: SharedListener<V>,
}

pub(crate) struct RegistryShared<V> {
  /// Flat key -> value cache.
  pub(crate) values: DashMap<String, V>,
  /// Key -> listeners. The outer map is unordered; the inner list is not.
  pub(crate) listeners: RwLock<HashMap<String, Vec<ListenerEntry<V>>>>,
  pub(crate) identities: IdentityAllocator,
}

impl<V: Send + Sync> RegistryShared<V> {
  pub(crate) fn new() -> Self {
    Self {
      values: DashMap::new(),
      listeners: RwLock::new(HashMap::new()),
      identities: IdentityAllocator::new(),
    }
  }

  // --- Value cache ---

  pub(crate) fn get_or(&self, key: &str, fallback: V) -> V
  where
    V: Clone,
  {
    match self.values.get(key) {
      Some(entry) => entry.value().clone(),
      None => fallback,
    }
  }

  pub(crate) fn get(&self, key: &str) -> Option<V>
  where
    V: Clone,
  {
    self.values.get(key).map(|entry| entry.value().clone())
  }

  pub(crate) fn contains_key(&self, key: &str) -> bool {
    self.values.contains_key(key)
  }

  pub(crate) fn set(&self, key: String, value: V) {
    self.values.insert(key, value);
  }

  pub(crate) fn remove(&self, key: &str) {
    self.values.remove(key);
  }

  // --- Listener table ---

  pub(crate) fn add_listener(
    &self,
    key: String,
    subscriber: SubscriberId,
    callback: SharedListener<V>,
  ) -> Result<(), DuplicateListenerError> {
    let mut table = self.listeners.write();
    match table.entry(key) {
      Entry::Occupied(mut slot) => {
        if slot.get().iter().any(|entry| entry.subscriber == subscriber) {
          let error = DuplicateListenerError {
            key: slot.key().clone(),
            subscriber,
          };
          warn!("{error}");
          return Err(error);
        }
        debug!("registered {subscriber} on key '{}'", slot.key());
        slot.get_mut().push(ListenerEntry {
          subscriber,
          callback,
        });
      }
      Entry::Vacant(slot) => {
        debug!("registered {subscriber} on key '{}'", slot.key());
        slot.insert(vec![ListenerEntry {
          subscriber,
          callback,
        }]);
      }
    }
    Ok(())
  }

  /// Invokes the single callback at (key, subscriber). Absent keys and
  /// absent subscribers are ignored.
  pub(crate) fn notify_one(&self, key: &str, subscriber: SubscriberId, value: &V) {
    // Clone the callback out so the table lock is not held during the call;
    // the callback may re-enter the registry.
    let callback = {
      let table = self.listeners.read();
      table.get(key).and_then(|entries| {
        entries
          .iter()
          .find(|entry| entry.subscriber == subscriber)
          .map(|entry| entry.callback.clone())
      })
    };
    if let Some(callback) = callback {
      callback.on_event(value);
    }
  }

  /// Invokes every callback under `key`, in registration order. A key with
  /// no listeners is ignored.
  pub(crate) fn notify_all(&self, key: &str, value: &V) {
    let callbacks: Vec<SharedListener<V>> = {
      let table = self.listeners.read();
      match table.get(key) {
        Some(entries) => entries.iter().map(|entry| entry.callback.clone()).collect(),
        None => return,
      }
    };
    trace!("notifying {} listener(s) on key '{key}'", callbacks.len());
    for callback in callbacks {
      callback.on_event(value);
    }
  }

  pub(crate) fn remove_listeners_for_key(&self, key: &str) {
    self.listeners.write().remove(key);
  }

  pub(crate) fn remove_listener(&self, key: &str, subscriber: SubscriberId) {
    let mut table = self.listeners.write();
    if let Some(entries) = table.get_mut(key) {
      entries.retain(|entry| entry.subscriber != subscriber);
      if entries.is_empty() {
        table.remove(key);
      }
    }
  }

  pub(crate) fn listener_count(&self, key: &str) -> usize {
    self
      .listeners
      .read()
      .get(key)
      .map_or(0, |entries| entries.len())
  }
}
