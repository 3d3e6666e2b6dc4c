//! Shopping cart state.
//!
//! Items are keyed by product id. Quantities are always at least one: any
//! update that would drive a quantity to zero removes the row instead.
//! Aggregates are recomputed from the items on every read, and every
//! mutation writes the whole item list back to the key/value store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use krishi_storage::KeyValueStore;

use crate::keys::CART_KEY;

/// A single cart row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub image_ref: String,
    pub seller_name: String,
    pub quantity: u32,
}

impl CartItem {
    /// `unit_price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Product fields needed to put something in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCandidate {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub image_ref: String,
    pub seller_name: String,
}

impl CartCandidate {
    fn into_item(self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name,
            unit_price: self.unit_price,
            image_ref: self.image_ref,
            seller_name: self.seller_name,
            quantity: 1,
        }
    }
}

/// Session cart backed by a key/value store.
pub struct CartStore {
    items: Vec<CartItem>,
    store: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Create an empty cart without reading persisted state.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Vec::new(),
            store,
        }
    }

    /// Restore the cart persisted under the cart key.
    ///
    /// Absent, unreadable, or malformed content yields an empty cart.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let items = match store.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => normalize(items),
                Err(e) => {
                    warn!(error = %e, "Persisted cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart, starting empty");
                Vec::new()
            }
        };
        debug!(rows = items.len(), "Cart restored");
        Self { items, store }
    }

    /// Add one unit of a product. Repeated adds of the same id grow its quantity.
    pub fn add_item(&mut self, candidate: CartCandidate) {
        match self.items.iter_mut().find(|item| item.id == candidate.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                debug!(id = %item.id, quantity = item.quantity, "Cart quantity incremented");
            }
            None => {
                debug!(id = %candidate.id, "Cart item added");
                self.items.push(candidate.into_item());
            }
        }
        self.persist();
    }

    /// Set the quantity of an existing row. Zero or negative removes it;
    /// unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        debug!(id, quantity = item.quantity, "Cart quantity updated");
        self.persist();
    }

    /// Remove a row if present.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() != before {
            debug!(id, "Cart item removed");
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        debug!("Cart cleared");
        self.persist();
    }

    /// Rows in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all rows.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across all rows.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.store.set(CART_KEY, &raw) {
            warn!(error = %e, "Failed to persist cart; keeping in-memory state");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Re-establish the cart invariants on restored rows: one row per id, no
/// zero quantities, no negative or non-finite prices.
fn normalize(rows: Vec<CartItem>) -> Vec<CartItem> {
    let mut items: Vec<CartItem> = Vec::with_capacity(rows.len());
    for row in rows {
        if row.quantity == 0 || !row.unit_price.is_finite() || row.unit_price < 0.0 {
            warn!(id = %row.id, "Dropping invalid persisted cart row");
            continue;
        }
        match items.iter_mut().find(|item| item.id == row.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(row.quantity);
            }
            None => items.push(row),
        }
    }
    items
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_core::error::{KrishiError, Result};
    use krishi_storage::MemoryStore;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(KrishiError::Storage("storage unavailable".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(KrishiError::Storage("storage unavailable".to_string()))
        }
    }

    fn candidate(id: &str, price: f64) -> CartCandidate {
        CartCandidate {
            id: id.to_string(),
            name: format!("Product {}", id),
            unit_price: price,
            image_ref: format!("https://img.example/{}.jpg", id),
            seller_name: "Rajesh Kumar".to_string(),
        }
    }

    fn cart() -> (CartStore, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CartStore::new(store.clone()), store)
    }

    fn assert_totals_consistent(cart: &CartStore) {
        let expected: f64 = cart
            .items()
            .iter()
            .map(|i| i.unit_price * f64::from(i.quantity))
            .sum();
        assert!((cart.total_price() - expected).abs() < 1e-9);
        let count: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
        assert_eq!(cart.total_items(), count);
    }

    #[test]
    fn test_add_and_update_scenario() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("A", 40.0));
        cart.add_item(candidate("A", 40.0));
        cart.add_item(candidate("B", 80.0));

        assert_eq!(cart.total_items(), 3);
        assert!((cart.total_price() - 160.0).abs() < 1e-9);

        cart.update_quantity("A", 0);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "B");
        assert_eq!(cart.total_items(), 1);
        assert!((cart.total_price() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_adds_never_duplicate_rows() {
        let (mut cart, _) = cart();
        let ids = ["1", "2", "1", "3", "1", "2"];
        for id in ids {
            cart.add_item(candidate(id, 10.0));
        }
        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.get("1").unwrap().quantity, 3);
        assert_eq!(cart.get("2").unwrap().quantity, 2);
        assert_eq!(cart.get("3").unwrap().quantity, 1);
        assert_eq!(cart.total_items(), ids.len() as u64);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("3", 1.0));
        cart.add_item(candidate("1", 1.0));
        cart.add_item(candidate("3", 1.0));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_update_to_zero_matches_remove() {
        let (mut a, _) = cart();
        let (mut b, _) = cart();
        for c in [&mut a, &mut b] {
            c.add_item(candidate("1", 40.0));
            c.add_item(candidate("2", 120.0));
            c.add_item(candidate("2", 120.0));
        }
        a.update_quantity("2", 0);
        b.remove_item("2");
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn test_negative_quantity_removes() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("1", 40.0));
        cart.update_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("1", 40.0));
        cart.update_quantity("missing", 5);
        cart.remove_item("missing");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_sets_quantity() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("1", 25.0));
        cart.update_quantity("1", 4);
        assert_eq!(cart.get("1").unwrap().quantity, 4);
        assert!((cart.total_price() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_zeroes_aggregates() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("1", 25.0));
        cart.add_item(candidate("2", 35.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn test_totals_consistent_after_interleaving() {
        let (mut cart, _) = cart();
        cart.add_item(candidate("1", 40.0));
        assert_totals_consistent(&cart);
        cart.add_item(candidate("2", 120.0));
        cart.update_quantity("2", 7);
        assert_totals_consistent(&cart);
        cart.add_item(candidate("3", 35.5));
        cart.remove_item("1");
        assert_totals_consistent(&cart);
        cart.clear();
        cart.add_item(candidate("4", 200.0));
        cart.update_quantity("4", 2);
        assert_totals_consistent(&cart);
        assert!((cart.total_price() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_mutations_persist_and_reload() {
        let (mut cart, store) = cart();
        cart.add_item(candidate("1", 40.0));
        cart.add_item(candidate("1", 40.0));
        cart.add_item(candidate("2", 80.0));

        let restored = CartStore::load(store.clone());
        assert_eq!(restored.items(), cart.items());
        assert_eq!(restored.total_items(), 3);

        cart.clear();
        let restored = CartStore::load(store);
        assert!(restored.is_empty());
    }

    #[test]
    fn test_persisted_format_is_camel_case() {
        let (mut cart, store) = cart();
        cart.add_item(candidate("1", 40.0));
        let raw = store.get(CART_KEY).unwrap().unwrap();
        assert!(raw.contains("\"unitPrice\":40.0"));
        assert!(raw.contains("\"sellerName\""));
        assert!(raw.contains("\"quantity\":1"));
    }

    #[test]
    fn test_load_malformed_yields_empty() {
        let store = Arc::new(MemoryStore::with_entries([(CART_KEY, "not json")]));
        let cart = CartStore::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_load_normalizes_rows() {
        let raw = r#"[
            {"id":"1","name":"Tomatoes","unitPrice":40,"imageRef":"","sellerName":"A","quantity":2},
            {"id":"1","name":"Tomatoes","unitPrice":40,"imageRef":"","sellerName":"A","quantity":1},
            {"id":"2","name":"Rice","unitPrice":120,"imageRef":"","sellerName":"B","quantity":0},
            {"id":"3","name":"Milk","unitPrice":-5,"imageRef":"","sellerName":"C","quantity":1}
        ]"#;
        let store = Arc::new(MemoryStore::with_entries([(CART_KEY, raw)]));
        let cart = CartStore::load(store);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 3);
    }

    #[test]
    fn test_storage_failure_does_not_break_mutations() {
        let mut cart = CartStore::load(Arc::new(FailingStore));
        assert!(cart.is_empty());
        cart.add_item(candidate("1", 40.0));
        cart.add_item(candidate("1", 40.0));
        cart.update_quantity("1", 5);
        assert_eq!(cart.total_items(), 5);
        assert!((cart.total_price() - 200.0).abs() < 1e-9);
        cart.clear();
        assert!(cart.is_empty());
    }
}
