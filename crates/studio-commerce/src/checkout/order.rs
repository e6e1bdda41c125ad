//! Order summary types.

use crate::cart::{CartPricing, LineItem};
use crate::ids::{generate_id, OrderId, ServiceId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One booked line, priced from the cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    pub service_id: ServiceId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// A confirmed (simulated) order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number (e.g., "SO-1A2B3C4D").
    pub order_number: String,
    /// Contact email from the checkout form.
    pub email: String,
    /// Items as booked.
    pub line_items: Vec<OrderLineItem>,
    /// Subtotal before tax.
    pub subtotal: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total.
    pub grand_total: Money,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    /// Book an order from the cart's line items and pricing breakdown.
    pub(crate) fn from_cart(email: &str, items: &[LineItem], pricing: CartPricing) -> Self {
        let line_items = items
            .iter()
            .map(|item| OrderLineItem {
                service_id: item.id.clone(),
                name: item.service.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price(),
                line_total: item.line_total(),
            })
            .collect();

        Self {
            id: OrderId::generate(),
            order_number: order_number(),
            email: email.to_string(),
            line_items,
            subtotal: pricing.subtotal,
            tax_total: pricing.tax_total,
            grand_total: pricing.grand_total,
            placed_at: current_timestamp(),
        }
    }

    /// Total item count across every line.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}

/// Generate a human-readable order number.
fn order_number() -> String {
    format!("SO-{}", generate_id()[..8].to_uppercase())
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    #[test]
    fn test_order_books_cart_snapshot() {
        let mut item = LineItem::new(
            CatalogItem::new("svc-1", "web-design", "Web Design").with_price("$100.00"),
        );
        item.quantity = 2;
        let items = vec![item];
        let pricing = CartPricing::compute(&items);

        let order = Order::from_cart("client@example.com", &items, pricing);

        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].line_total, Money::new(20_000));
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.subtotal, Money::new(20_000));
        assert_eq!(order.grand_total, Money::new(21_600));
        assert!(order.order_number.starts_with("SO-"));
    }
}
