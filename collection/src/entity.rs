/// The element contract for identity-indexed collections.
///
/// An entity is any value with a stable, caller-assigned string identity.
/// The identity is immutable after construction and is the sole key used for
/// lookup, update, and delete; a collection never inspects any other field.
///
/// `Clone` doubles as the deep-copy operation: entities own their data, so a
/// clone is fully independent of the original.
pub trait Entity: Clone {
  /// The plain representation produced by [`Entity::to_record`].
  type Record;

  /// The stable identity used as the collection lookup key.
  fn id(&self) -> &str;

  /// Projects the entity to its plain key/value representation.
  fn to_record(&self) -> Self::Record;
}
