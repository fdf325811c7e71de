use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every value a listener receives, for later assertion.
///
/// Cloning a recorder shares its event log, so a clone can be moved into a
/// listener closure while the test keeps the original for reading.
#[derive(Clone, Default)]
pub struct Recorder {
  events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
  pub fn new() -> Self {
    Self::default()
  }

  /// A listener closure that appends a tag plus the received value.
  pub fn listener(&self, tag: &str) -> impl Fn(&String) + Send + Sync + 'static {
    let events = self.events.clone();
    let tag = tag.to_owned();
    move |value: &String| events.lock().push(format!("{tag}:{value}"))
  }

  pub fn events(&self) -> Vec<String> {
    self.events.lock().clone()
  }
}
