use std::sync::Arc;

/// A callback registered under a (key, subscriber) pair in the registry.
///
/// The registry treats the notified value as opaque; callers of a given key
/// agree out-of-band on its shape. Implemented for any `Fn(&V)` closure, so
/// most callers never name this trait.
pub trait Listener<V>: Send + Sync {
  fn on_event(&self, value: &V);
}

impl<V, F> Listener<V> for F
where
  F: Fn(&V) + Send + Sync,
{
  fn on_event(&self, value: &V) {
    self(value)
  }
}

/// Listeners are held behind `Arc` so notification can clone them out of the
/// table and invoke them after the lock is released.
pub(crate) type SharedListener<V> = Arc<dyn Listener<V>>;
