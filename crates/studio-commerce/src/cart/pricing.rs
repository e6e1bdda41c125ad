//! Cart pricing calculations.
//!
//! Pure functions over line items. Every amount derives from the snapshotted
//! price text at call time; nothing here caches.

use crate::cart::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default sales tax rate applied at checkout.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Pre-tax subtotal: sum of unit price x quantity.
pub fn subtotal(items: &[LineItem]) -> Money {
    items.iter().map(|i| i.line_total()).sum()
}

/// Tax on a subtotal at the given rate, rounded to the nearest cent.
pub fn tax(subtotal: Money, rate: f64) -> Money {
    subtotal.multiply_decimal(rate)
}

/// Subtotal plus tax at the given rate.
pub fn total_with_tax(items: &[LineItem], rate: f64) -> Money {
    let sub = subtotal(items);
    sub + tax(sub, rate)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Subtotal before tax.
    pub subtotal: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total (subtotal + tax).
    pub grand_total: Money,
}

impl CartPricing {
    /// Compute the breakdown at the default tax rate.
    pub fn compute(items: &[LineItem]) -> Self {
        Self::compute_with_rate(items, DEFAULT_TAX_RATE)
    }

    /// Compute the breakdown at a caller-supplied tax rate.
    pub fn compute_with_rate(items: &[LineItem], rate: f64) -> Self {
        let subtotal = subtotal(items);
        let tax_total = tax(subtotal, rate);
        Self {
            subtotal,
            tax_total,
            grand_total: subtotal + tax_total,
        }
    }
}
