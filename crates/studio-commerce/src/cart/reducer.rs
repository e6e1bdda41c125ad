//! Cart state machine.
//!
//! Every mutation is a `CartAction` folded through [`reduce`]. The reducer
//! is total: malformed targets are no-ops, quantities at or below zero turn
//! into removals, and a load clamps whatever storage produced. Aggregates
//! are rebuilt from the resulting items on every transition.

use crate::cart::state::{CartState, LineItem};
use crate::catalog::CatalogItem;
use crate::ids::ServiceId;

/// A cart transition request.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one of a service; increments the existing line if present.
    Add(CatalogItem),
    /// Remove a line entirely. No-op if absent.
    Remove(ServiceId),
    /// Set a line's quantity; `quantity <= 0` removes it. No-op if absent.
    SetQuantity { id: ServiceId, quantity: i64 },
    /// Empty the cart.
    Clear,
    /// Replace the items wholesale with what persistence produced.
    Load(Vec<LineItem>),
}

/// Apply one action to a state, producing the next state.
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::Add(service) => {
            let mut items = state.items.clone();
            if let Some(existing) = items.iter_mut().find(|i| i.id == service.id) {
                existing.quantity += 1;
            } else {
                items.push(LineItem::new(service));
            }
            CartState::from_items(items)
        }

        CartAction::Remove(id) => {
            let items = state
                .items
                .iter()
                .filter(|i| i.id != id)
                .cloned()
                .collect();
            CartState::from_items(items)
        }

        CartAction::SetQuantity { id, quantity } => {
            if quantity <= 0 {
                return reduce(state, CartAction::Remove(id));
            }
            let mut items = state.items.clone();
            if let Some(item) = items.iter_mut().find(|i| i.id == id) {
                item.quantity = quantity;
            }
            CartState::from_items(items)
        }

        CartAction::Clear => CartState::default(),

        CartAction::Load(items) => {
            // Stored data is not trusted: entries that deserialized with a
            // non-positive quantity are dropped rather than carried.
            let items = items.into_iter().filter(|i| i.quantity > 0).collect();
            CartState::from_items(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn service(id: &str, price: &str) -> CatalogItem {
        CatalogItem::new(id, id, id).with_price(price)
    }

    fn add(state: &CartState, id: &str, price: &str) -> CartState {
        reduce(state, CartAction::Add(service(id, price)))
    }

    #[test]
    fn test_add_first_item() {
        let state = add(&CartState::default(), "svc-1", "$100.00");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.item_count, 1);
        assert_eq!(state.total, Money::new(10_000));
    }

    #[test]
    fn test_add_same_id_increments() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let state = add(&state, "svc-1", "$100.00");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.total, Money::new(20_000));
    }

    #[test]
    fn test_re_add_keeps_position_and_added_at() {
        let state = add(&CartState::default(), "svc-1", "$10.00");
        let state = add(&state, "svc-2", "$20.00");
        let first_added_at = state.items[0].added_at;

        let state = add(&state, "svc-1", "$10.00");
        assert_eq!(state.items[0].id, ServiceId::new("svc-1"));
        assert_eq!(state.items[0].added_at, first_added_at);
    }

    #[test]
    fn test_remove_item() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let state = reduce(&state, CartAction::Remove(ServiceId::new("svc-1")));

        assert!(state.is_empty());
        assert_eq!(state.total, Money::zero());
        assert_eq!(state.item_count, 0);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let once = reduce(&state, CartAction::Remove(ServiceId::new("svc-1")));
        let twice = reduce(&once, CartAction::Remove(ServiceId::new("svc-1")));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_quantity() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let state = reduce(
            &state,
            CartAction::SetQuantity {
                id: ServiceId::new("svc-1"),
                quantity: 5,
            },
        );

        assert_eq!(state.item_count, 5);
        assert_eq!(state.total, Money::new(50_000));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let state = reduce(
            &state,
            CartAction::SetQuantity {
                id: ServiceId::new("svc-1"),
                quantity: 0,
            },
        );

        assert!(state.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let state = add(&CartState::default(), "svc-1", "$100.00");
        let next = reduce(
            &state,
            CartAction::SetQuantity {
                id: ServiceId::new("missing"),
                quantity: 5,
            },
        );

        assert_eq!(state, next);
    }

    #[test]
    fn test_add_twice_equals_add_then_set_two() {
        let via_add = add(&add(&CartState::default(), "svc-1", "$100.00"), "svc-1", "$100.00");
        let via_set = reduce(
            &add(&CartState::default(), "svc-1", "$100.00"),
            CartAction::SetQuantity {
                id: ServiceId::new("svc-1"),
                quantity: 2,
            },
        );

        assert_eq!(via_add.items[0].quantity, via_set.items[0].quantity);
        assert_eq!(via_add.total, via_set.total);
        assert_eq!(via_add.item_count, via_set.item_count);
    }

    #[test]
    fn test_clear() {
        let state = add(&add(&CartState::default(), "svc-1", "$50.00"), "svc-2", "$30.00");
        let state = reduce(&state, CartAction::Clear);

        assert!(state.is_empty());
        assert_eq!(state.total, Money::zero());
        assert_eq!(state.item_count, 0);
    }

    #[test]
    fn test_load_recomputes_aggregates() {
        let seeded = add(&CartState::default(), "svc-1", "$50.00");
        let state = reduce(&CartState::default(), CartAction::Load(seeded.items.clone()));

        assert_eq!(state.total, Money::new(5_000));
        assert_eq!(state.item_count, 1);
    }

    #[test]
    fn test_load_drops_non_positive_quantities() {
        let mut good = LineItem::new(service("svc-1", "$10.00"));
        good.quantity = 2;
        let mut bad = LineItem::new(service("svc-2", "$10.00"));
        bad.quantity = 0;
        let mut worse = LineItem::new(service("svc-3", "$10.00"));
        worse.quantity = -4;

        let state = reduce(&CartState::default(), CartAction::Load(vec![good, bad, worse]));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.item_count, 2);
    }

    #[test]
    fn test_aggregates_consistent_over_action_sequence() {
        let actions = vec![
            CartAction::Add(service("svc-1", "$50.00")),
            CartAction::Add(service("svc-2", "$30.00")),
            CartAction::Add(service("svc-2", "$30.00")),
            CartAction::SetQuantity {
                id: ServiceId::new("svc-2"),
                quantity: 3,
            },
            CartAction::Remove(ServiceId::new("svc-1")),
            CartAction::Add(service("svc-3", "no price yet")),
        ];

        let mut state = CartState::default();
        for action in actions {
            state = reduce(&state, action);

            let expected_count: i64 = state.items.iter().map(|i| i.quantity).sum();
            let expected_total: Money = state.items.iter().map(|i| i.line_total()).sum();
            assert_eq!(state.item_count, expected_count);
            assert_eq!(state.total, expected_total);
        }

        assert_eq!(state.item_count, 4);
        assert_eq!(state.total, Money::new(9_000));
    }
}
