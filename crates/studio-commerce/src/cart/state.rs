//! Cart state and line item types.

use crate::cart::pricing;
use crate::catalog::CatalogItem;
use crate::ids::ServiceId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One entry in the cart: a snapshotted service plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Always equal to `service.id`; the cart holds at most one line per id.
    pub id: ServiceId,
    /// Catalog snapshot taken when the line was created. Pricing reads this,
    /// never the live catalog.
    pub service: CatalogItem,
    /// Quantity, always >= 1 inside a well-formed cart.
    pub quantity: i64,
    /// Unix timestamp of creation; set once, untouched by quantity changes.
    pub added_at: i64,
}

impl LineItem {
    /// Create a line item with quantity 1, stamped now.
    pub fn new(service: CatalogItem) -> Self {
        Self {
            id: service.id.clone(),
            service,
            quantity: 1,
            added_at: current_timestamp(),
        }
    }

    /// Unit price parsed from the snapshotted price text.
    pub fn unit_price(&self) -> Money {
        self.service.price()
    }

    /// Line total (unit price x quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply(self.quantity)
    }
}

/// The cart: line items in insertion order plus derived aggregates.
///
/// `total` and `item_count` are rederived from `items` after every
/// transition — they are never incremented in place and never trusted from
/// storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartState {
    /// Line items, oldest first. Re-adding an existing id does not move it.
    pub items: Vec<LineItem>,
    /// Sum of line totals (pre-tax).
    pub total: Money,
    /// Sum of quantities.
    pub item_count: i64,
}

impl CartState {
    /// Build a state from line items, computing both aggregates from scratch.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let total = pricing::subtotal(&items);
        let item_count = items.iter().map(|i| i.quantity).sum();
        Self {
            items,
            total,
            item_count,
        }
    }

    /// Check if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the line item for a service id.
    pub fn get(&self, id: &ServiceId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether a service is in the cart.
    pub fn contains(&self, id: &ServiceId) -> bool {
        self.get(id).is_some()
    }

    /// Quantity for a service id, zero if absent.
    pub fn quantity_of(&self, id: &ServiceId) -> i64 {
        self.get(id).map(|i| i.quantity).unwrap_or(0)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
