use serde_json::{json, Value};
use std::fmt;
use strata_collection::{Entity, EntityCollection};

/// A small catalog entity used across the integration tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
  id: String,
  pub price: u32,
}

impl Product {
  pub fn new(id: impl Into<String>, price: u32) -> Self {
    Self {
      id: id.into(),
      price,
    }
  }
}

impl Entity for Product {
  type Record = Value;

  fn id(&self) -> &str {
    &self.id
  }

  fn to_record(&self) -> Value {
    json!({ "id": self.id, "price": self.price })
  }
}

impl fmt::Display for Product {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Product(id: {}, price: {})", self.id, self.price)
  }
}

/// Builds a collection of `count` products with ids `id0..` and prices
/// `100..`.
pub fn product_range(count: usize) -> EntityCollection<Product> {
  (0..count)
    .map(|index| Product::new(format!("id{index}"), 100 + index as u32))
    .collect()
}

/// The prices of the collection's elements, in order.
pub fn prices(collection: &EntityCollection<Product>) -> Vec<u32> {
  collection.iter().map(|product| product.price).collect()
}
