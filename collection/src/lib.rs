//! # Strata Collection
//!
//! Identity-indexed ordered collections for layered applications.
//!
//! An [`EntityCollection`] owns an ordered sequence of values with stable
//! string identities and exposes CRUD-by-id, bulk variants that silently
//! skip absentees, deep cloning, projection to a plain representation, and
//! a pluggable re-ordering protocol driven by a [`SelectionStrategy`].
//!
//! ## Quick Start
//!
//! ```
//! use strata_collection::{DescendingBy, Entity, EntityCollection};
//!
//! #[derive(Clone)]
//! struct Task {
//!   id: String,
//!   priority: u32,
//! }
//!
//! impl Entity for Task {
//!   type Record = (String, u32);
//!
//!   fn id(&self) -> &str {
//!     &self.id
//!   }
//!
//!   fn to_record(&self) -> Self::Record {
//!     (self.id.clone(), self.priority)
//!   }
//! }
//!
//! let mut tasks: EntityCollection<Task> = EntityCollection::new();
//! tasks.add(Task { id: "build".into(), priority: 2 });
//! tasks.add(Task { id: "ship".into(), priority: 5 });
//! tasks.add(Task { id: "triage".into(), priority: 1 });
//!
//! // CRUD by identity; absent ids are silently skipped.
//! tasks.delete_by_id("triage");
//! tasks.delete_by_id("not-there");
//! assert_eq!(tasks.len(), 2);
//!
//! // Reorder with the provided repeated-argmax strategy.
//! let mut by_priority = DescendingBy::new(|task: &Task| task.priority);
//! tasks.sort_by_strategy(&mut by_priority);
//! assert_eq!(tasks.get(0).unwrap().id(), "ship");
//! ```

mod collection;
mod entity;
mod strategy;

pub use collection::EntityCollection;
pub use entity::Entity;
pub use strategy::{DescendingBy, SelectionStrategy};
