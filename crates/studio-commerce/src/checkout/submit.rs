//! Simulated order submission.

use crate::cart::CartManager;
use crate::checkout::form::CheckoutForm;
use crate::checkout::order::Order;
use crate::error::CommerceError;
use tracing::info;

/// Submit the checkout form against the current cart.
///
/// No payment processor is involved: a valid form on a non-empty cart is
/// always approved. On success the cart is cleared — the only effect this
/// call has on cart state. Validation or an empty cart rejects the
/// submission and leaves the cart exactly as it was.
pub fn submit_order(cart: &mut CartManager, form: &CheckoutForm) -> Result<Order, CommerceError> {
    if cart.state().is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let errors = form.validate();
    if !errors.is_empty() {
        return Err(CommerceError::CheckoutRejected(errors));
    }

    let order = Order::from_cart(&form.email, &cart.state().items, cart.pricing());
    info!(
        order_number = %order.order_number,
        total = %order.grand_total,
        "order placed"
    );
    cart.clear_cart();

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::checkout::form::PaymentMethod;
    use crate::money::Money;
    use studio_store::MemoryStore;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            email: "client@example.com".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            address: "123 Main St".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip: "97201".to_string(),
            phone: "555-0100".to_string(),
            project_details: "Marketing site refresh".to_string(),
            payment_method: PaymentMethod::Invoice,
            ..CheckoutForm::default()
        }
    }

    fn cart_with_item(storage: MemoryStore) -> CartManager {
        let mut cart = CartManager::with_storage(Box::new(storage));
        cart.add_item(CatalogItem::new("svc-1", "web-design", "Web Design").with_price("$100.00"));
        cart
    }

    #[test]
    fn test_success_books_order_and_clears_cart() {
        let storage = MemoryStore::new();
        let mut cart = cart_with_item(storage.clone());

        let order = submit_order(&mut cart, &valid_form()).unwrap();

        assert_eq!(order.email, "client@example.com");
        assert_eq!(order.grand_total, Money::new(10_800));
        assert!(cart.state().is_empty());

        // The cleared cart is what persistence now holds.
        let reloaded = CartManager::with_storage(Box::new(storage));
        assert!(reloaded.state().is_empty());
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut cart = CartManager::with_storage(Box::new(MemoryStore::new()));
        assert!(matches!(
            submit_order(&mut cart, &valid_form()),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_invalid_form_leaves_cart_untouched() {
        let mut cart = cart_with_item(MemoryStore::new());
        let mut form = valid_form();
        form.email = String::new();

        let result = submit_order(&mut cart, &form);

        match result {
            Err(CommerceError::CheckoutRejected(errors)) => {
                assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(cart.state().item_count, 1);
    }
}
