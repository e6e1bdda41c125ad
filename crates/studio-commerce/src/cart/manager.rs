//! Cart manager façade.
//!
//! The one stateful object in the crate: owns the current `CartState`,
//! funnels every mutation through the reducer, persists the result, and
//! notifies subscribers before the mutating call returns. Construct one per
//! application session and pass it wherever the UI needs it.

use crate::cart::persist::CartStore;
use crate::cart::pricing::CartPricing;
use crate::cart::reducer::{reduce, CartAction};
use crate::cart::state::CartState;
use crate::catalog::CatalogItem;
use crate::ids::ServiceId;
use studio_store::Storage;
use tracing::debug;

/// Handle returned by [`CartManager::subscribe`]; pass it back to
/// [`CartManager::unsubscribe`] to stop delivery.
#[derive(Debug, PartialEq, Eq)]
pub struct Subscription(u64);

type Listener = Box<dyn Fn(&CartState)>;

/// The public cart surface: mutations, queries, and change notification.
pub struct CartManager {
    state: CartState,
    store: CartStore,
    listeners: Vec<(u64, Listener)>,
    next_subscription: u64,
}

impl CartManager {
    /// Create a manager over a persistence adapter, loading once.
    pub fn new(store: CartStore) -> Self {
        let loaded = store.load();
        let state = reduce(&CartState::default(), CartAction::Load(loaded));
        Self {
            state,
            store,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a manager over a raw storage backend with the default key.
    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self::new(CartStore::new(storage))
    }

    fn dispatch(&mut self, action: CartAction) {
        debug!(?action, "cart dispatch");
        self.state = reduce(&self.state, action);
        self.store.save(&self.state.items);
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    /// Add one of a service to the cart.
    pub fn add_item(&mut self, service: CatalogItem) {
        self.dispatch(CartAction::Add(service));
    }

    /// Remove a service from the cart. No-op if absent.
    pub fn remove_item(&mut self, id: &ServiceId) {
        self.dispatch(CartAction::Remove(id.clone()));
    }

    /// Set the quantity for a service; zero or less removes it.
    pub fn update_quantity(&mut self, id: &ServiceId, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// The current state, for rendering.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Check whether a service is in the cart.
    pub fn is_in_cart(&self, id: &ServiceId) -> bool {
        self.state.contains(id)
    }

    /// Quantity for a service, zero if absent.
    pub fn item_quantity(&self, id: &ServiceId) -> i64 {
        self.state.quantity_of(id)
    }

    /// Pricing breakdown for the current items at the default tax rate.
    pub fn pricing(&self) -> CartPricing {
        CartPricing::compute(&self.state.items)
    }

    /// Register a listener called with the new state after every mutation.
    ///
    /// Delivery is synchronous: by the time a mutating call returns, every
    /// listener has seen the state that call produced.
    pub fn subscribe(&mut self, listener: impl Fn(&CartState) + 'static) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription(id)
    }

    /// Deregister a listener. Returns false if the handle was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.0);
        self.listeners.len() < before
    }
}
