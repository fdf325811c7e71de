//! # Strata Share
//!
//! In-process shared state for layered applications: a keyed value cache
//! paired with a per-key, multi-subscriber listener registry, accessed
//! through lightweight proxy handles that each carry a unique subscriber
//! identity.
//!
//! ## Core Concepts
//!
//! - **Registry**: an explicitly constructed, cheaply cloneable handle over
//!   the shared cache and listener table. There is no global instance; share
//!   a registry by cloning it or passing it by reference.
//! - **Proxy**: a handle bound to one registry with its own subscriber
//!   identity. A proxy registers and tears down only its own listeners, yet
//!   can read, write, and broadcast globally.
//! - **At most one listener per (key, subscriber)**: registering twice on
//!   the same key from the same proxy is a programmer error, reported as an
//!   explicit `Err` instead of overwriting.
//!
//! ## Quick Start
//!
//! ```
//! use strata_share::Registry;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let registry: Registry<String> = Registry::new();
//! let proxy = registry.proxy();
//!
//! // The value cache is plain get/set with a fallback-returning read.
//! proxy.set("greeting", "hello".to_string());
//! assert_eq!(proxy.get_or("greeting", String::new()), "hello");
//! assert_eq!(proxy.get_or("missing", "default".to_string()), "default");
//!
//! // Listeners are scoped to the proxy's identity.
//! let seen = Arc::new(AtomicUsize::new(0));
//! let counter = seen.clone();
//! proxy
//!   .add_listener("greeting", move |_value: &String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!   })
//!   .unwrap();
//!
//! registry.notify_all("greeting", &"hi".to_string());
//! assert_eq!(seen.load(Ordering::SeqCst), 1);
//!
//! // Bulk teardown of everything this proxy ever registered.
//! proxy.remove_listener_for_keys(&["greeting"]);
//! assert_eq!(registry.listener_count("greeting"), 0);
//! ```

mod error;
mod identity;
mod listener;
mod proxy;
mod registry;
mod shared;

pub use error::DuplicateListenerError;
pub use identity::{IdentityAllocator, SubscriberId};
pub use listener::Listener;
pub use proxy::Proxy;
pub use registry::Registry;
