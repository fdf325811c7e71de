//! Subscriber identity allocation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// The unique identity carried by one listener-registering handle.
///
/// Identities scope listener registrations: two proxies listening on the
/// same key occupy independent slots in the listener table, and one proxy's
/// bulk teardown never touches another's registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

impl SubscriberId {
  /// Returns the raw numeric identity.
  pub fn as_u64(self) -> u64 {
    self.0
  }
}

impl fmt::Display for SubscriberId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "subscriber-{}", self.0)
  }
}

/// Issues unique [`SubscriberId`]s for the lifetime of the allocator.
///
/// The counter starts below the first valid identity and increments on every
/// call, so no identity is ever handed out twice. Allocation is lock-free
/// and safe to call from any thread.
#[derive(Debug)]
pub struct IdentityAllocator {
  next: AtomicU64,
}

impl IdentityAllocator {
  pub const fn new() -> Self {
    Self {
      next: AtomicU64::new(0),
    }
  }

  /// Allocates the next identity.
  pub fn next_id(&self) -> SubscriberId {
    SubscriberId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
  }
}

impl Default for IdentityAllocator {
  fn default() -> Self {
    Self::new()
  }
}
