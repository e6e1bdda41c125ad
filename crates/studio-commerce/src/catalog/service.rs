//! Service catalog items and the content read interface.

use crate::ids::ServiceId;
use crate::money::{parse_price, Money};
use serde::{Deserialize, Serialize};

/// A sellable service entry from the content catalog.
///
/// The cart snapshots this by value when a line item is created, so later
/// catalog edits never change what an existing line item costs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique service identifier.
    pub id: ServiceId,
    /// URL-friendly slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Full description (may contain markup).
    pub description: Option<String>,
    /// Display price as published (e.g., "Starting at $2,500").
    pub price_text: Option<String>,
    /// Reference to the service image/icon.
    pub image_ref: Option<String>,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(
        id: impl Into<ServiceId>,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            description: None,
            price_text: None,
            image_ref: None,
        }
    }

    /// Set the published price text.
    pub fn with_price(mut self, text: impl Into<String>) -> Self {
        self.price_text = Some(text.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// The unit price parsed from the published price text.
    ///
    /// A missing or malformed price is zero; it never blocks an add.
    pub fn price(&self) -> Money {
        self.price_text
            .as_deref()
            .map(parse_price)
            .unwrap_or_else(Money::zero)
    }
}

/// Read-only interface to the hosted content catalog.
///
/// The cart core only reads services; how they are fetched (CMS client,
/// fixture, cache) is the implementor's business.
pub trait ContentSource {
    /// List every published service.
    fn list_services(&self) -> Vec<CatalogItem>;

    /// Look up a service by slug or id.
    fn service_by_slug_or_id(&self, key: &str) -> Option<CatalogItem>;
}
