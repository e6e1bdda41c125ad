//! Cart persistence adapter.
//!
//! Writes the full line-item list under one well-known key after every
//! mutation and reads it back once at startup. Both directions are
//! best-effort: a failed save is logged and swallowed, a failed load yields
//! an empty cart, and individually broken entries are discarded without
//! failing the rest.

use crate::cart::LineItem;
use crate::catalog::CatalogItem;
use crate::ids::ServiceId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use studio_store::{Storage, StorageExt};
use tracing::warn;

/// Well-known storage key for the cart document.
pub const CART_STORAGE_KEY: &str = "cart";

/// Current persisted-layout version.
const SCHEMA_VERSION: u32 = 1;

/// Versioned envelope around the stored line items.
///
/// Items stay as raw JSON values so one malformed entry can be dropped
/// without losing its neighbors.
#[derive(Debug, Serialize, Deserialize)]
struct CartDocument {
    version: u32,
    items: Vec<Value>,
}

/// Flat on-disk record for one line item: cart fields plus the catalog
/// snapshot fields, as the site has always stored them.
#[derive(Debug, Serialize, Deserialize)]
struct StoredLineItem {
    id: String,
    quantity: i64,
    added_at: i64,
    name: String,
    #[serde(default)]
    slug: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price_text: Option<String>,
    #[serde(default)]
    image_ref: Option<String>,
}

impl From<&LineItem> for StoredLineItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            quantity: item.quantity,
            added_at: item.added_at,
            name: item.service.name.clone(),
            slug: item.service.slug.clone(),
            description: item.service.description.clone(),
            price_text: item.service.price_text.clone(),
            image_ref: item.service.image_ref.clone(),
        }
    }
}

impl StoredLineItem {
    fn into_line_item(self) -> LineItem {
        let id = ServiceId::new(self.id);
        LineItem {
            id: id.clone(),
            service: CatalogItem {
                id,
                slug: self.slug,
                name: self.name,
                description: self.description,
                price_text: self.price_text,
                image_ref: self.image_ref,
            },
            quantity: self.quantity,
            added_at: self.added_at,
        }
    }
}

/// The persistence adapter the cart manager writes through.
pub struct CartStore {
    storage: Box<dyn Storage>,
    key: String,
}

impl CartStore {
    /// Create an adapter over `storage` using the default cart key.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self::with_key(storage, CART_STORAGE_KEY)
    }

    /// Create an adapter writing under a custom key.
    pub fn with_key(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the persisted line items.
    ///
    /// Never fails: storage errors, unreadable documents, and broken entries
    /// all degrade to fewer (possibly zero) items, with a warning logged.
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match self.storage.get_json::<Value>(&self.key) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "cart load failed, starting empty");
                return Vec::new();
            }
        };

        let entries = match raw {
            // Versioned envelope.
            Value::Object(_) => match serde_json::from_value::<CartDocument>(raw) {
                Ok(doc) => {
                    if doc.version > SCHEMA_VERSION {
                        warn!(
                            key = %self.key,
                            version = doc.version,
                            "cart document from a newer schema, loading best-effort"
                        );
                    }
                    doc.items
                }
                Err(err) => {
                    warn!(key = %self.key, error = %err, "unreadable cart document, starting empty");
                    return Vec::new();
                }
            },
            // Legacy layout: a bare array of records.
            Value::Array(items) => items,
            _ => {
                warn!(key = %self.key, "corrupt cart document, starting empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<StoredLineItem>(entry) {
                Ok(stored) => Some(stored.into_line_item()),
                Err(err) => {
                    warn!(key = %self.key, error = %err, "discarding unreadable cart entry");
                    None
                }
            })
            .collect()
    }

    /// Persist the full line-item list.
    ///
    /// Best-effort: a serialization or write failure is logged and never
    /// propagated, so the in-memory cart keeps working.
    pub fn save(&self, items: &[LineItem]) {
        let doc = CartDocument {
            version: SCHEMA_VERSION,
            items: items
                .iter()
                .filter_map(|item| match serde_json::to_value(StoredLineItem::from(item)) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        warn!(key = %self.key, error = %err, "skipping unserializable cart entry");
                        None
                    }
                })
                .collect(),
        };

        if let Err(err) = self.storage.set_json(&self.key, &doc) {
            warn!(key = %self.key, error = %err, "cart save failed, continuing in memory");
        }
    }
}
