//! Commerce domain core for the studio storefront.
//!
//! This crate holds the client-local commerce logic behind the agency's
//! marketing site:
//!
//! - **Catalog**: service snapshots and the read-only content interface
//! - **Cart**: line items, the reducer, derived pricing, persistence
//! - **Checkout**: form validation and simulated order submission
//! - **Search**: free-text matching over site content
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_commerce::prelude::*;
//! use studio_store::MemoryStore;
//!
//! let mut cart = CartManager::with_storage(Box::new(MemoryStore::new()));
//! let service = CatalogItem::new("svc-1", "web-design", "Web Design")
//!     .with_price("$2,500.00");
//!
//! cart.add_item(service);
//! println!("Total: {}", cart.pricing().grand_total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ServiceId};
pub use money::{parse_price, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ServiceId};
    pub use crate::money::{parse_price, Money};

    // Catalog
    pub use crate::catalog::{
        CaseStudy, CatalogItem, ContentSource, SiteContent, TeamMember, Testimonial,
    };

    // Cart
    pub use crate::cart::{
        reduce, CartAction, CartManager, CartPricing, CartState, CartStore, LineItem,
        Subscription, DEFAULT_TAX_RATE,
    };

    // Checkout
    pub use crate::checkout::{
        submit_order, CheckoutForm, FieldError, Order, OrderLineItem, PaymentMethod,
    };

    // Search
    pub use crate::search::{search_content, ContentKind, SearchResult};
}
