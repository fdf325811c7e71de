mod common;

use common::{prices, product_range, Product};
use strata_collection::{DescendingBy, Entity, EntityCollection, SelectionStrategy};

#[test]
fn test_descending_reorder_is_total() {
  let mut products = product_range(10);

  let mut by_price = DescendingBy::new(|product: &Product| product.price);
  products.sort_by_strategy(&mut by_price);

  // A total reorder, not a filter: same length, nothing lost or duplicated.
  assert_eq!(products.len(), 10);
  assert_eq!(
    prices(&products),
    vec![109, 108, 107, 106, 105, 104, 103, 102, 101, 100]
  );
}

#[test]
fn test_reorder_on_single_element() {
  let mut products = product_range(1);

  let mut by_price = DescendingBy::new(|product: &Product| product.price);
  products.sort_by_strategy(&mut by_price);

  assert_eq!(products.len(), 1);
  assert_eq!(products.get(0).unwrap().price, 100);
}

#[test]
fn test_reorder_on_empty_collection_is_a_noop() {
  let mut products: EntityCollection<Product> = EntityCollection::new();

  let mut by_price = DescendingBy::new(|product: &Product| product.price);
  products.sort_by_strategy(&mut by_price);

  assert!(products.is_empty());
  // The strategy was never loaded.
  assert!(!by_price.has_next());
}

#[test]
fn test_descending_ties_keep_first_seen_order() {
  let mut products = EntityCollection::from_vec(vec![
    Product::new("a", 5),
    Product::new("b", 9),
    Product::new("c", 5),
    Product::new("d", 9),
  ]);

  let mut by_price = DescendingBy::new(|product: &Product| product.price);
  products.sort_by_strategy(&mut by_price);

  // Strict comparison: equal keys come out in their original order.
  let ids: Vec<&str> = products.iter().map(|product| product.id()).collect();
  assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn test_reorder_does_not_alias_the_source() {
  let mut products = product_range(3);

  let mut by_price = DescendingBy::new(|product: &Product| product.price);
  products.sort_by_strategy(&mut by_price);

  // The strategy's snapshot was drained completely during the rebuild.
  assert!(!by_price.has_next());
  assert!(by_price.take_next().is_none());
  assert_eq!(products.len(), 3);
}

/// A caller-supplied strategy: ascending by price via repeated minimum
/// extraction, exercising the trait from outside the crate.
struct AscendingByPrice {
  buffer: Vec<Product>,
}

impl AscendingByPrice {
  fn new() -> Self {
    Self { buffer: Vec::new() }
  }
}

impl SelectionStrategy<Product> for AscendingByPrice {
  fn load(&mut self, buffer: Vec<Product>) {
    self.buffer = buffer;
  }

  fn has_next(&self) -> bool {
    !self.buffer.is_empty()
  }

  fn take_next(&mut self) -> Option<Product> {
    if self.buffer.is_empty() {
      return None;
    }
    let mut selected = 0;
    for (index, product) in self.buffer.iter().enumerate().skip(1) {
      if product.price < self.buffer[selected].price {
        selected = index;
      }
    }
    Some(self.buffer.remove(selected))
  }
}

#[test]
fn test_custom_strategy_through_the_trait() {
  let mut products = EntityCollection::from_vec(vec![
    Product::new("x", 104),
    Product::new("y", 101),
    Product::new("z", 108),
  ]);

  let mut ascending = AscendingByPrice::new();
  products.sort_by_strategy(&mut ascending);

  assert_eq!(prices(&products), vec![101, 104, 108]);
}
