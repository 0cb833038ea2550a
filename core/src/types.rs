//! DTOs for the catalog backend's wire format.
//!
//! # Design
//! These types mirror the backend's response schemas but are defined
//! independently of the mock-server crate; integration tests catch schema
//! drift. `Product` is treated as a pass-through value — every optional field
//! defaults rather than failing deserialization, because this layer performs
//! no validation beyond what the backend returns. `ProductPage` defaults all
//! of its fields so a degenerate `{}` response still yields a fully populated
//! page. `SyncLogPage` deliberately does not: sync logs are returned verbatim
//! and absent fields are the caller's problem.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters for the product list endpoint.
///
/// `skip` and `limit` are always serialized; the optional filters only when
/// they pass their validity predicate (non-empty after trimming for strings,
/// `>= 0` for price bounds).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub skip: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
            search: None,
            category: None,
            min_price: None,
            max_price: None,
        }
    }
}

/// One page of the product listing, normalized at the boundary: a response
/// missing any of these fields deserializes to empty/zero rather than
/// surfacing partially undefined data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

/// A catalog product as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub qty: Option<i64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub retail_min_price: Option<f64>,
    #[serde(default)]
    pub retail_min_base_price: Option<f64>,
    #[serde(default = "default_true")]
    pub available_to_buy: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub small_image: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub price_limit: Option<Value>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub restrictions: Option<Restrictions>,
    #[serde(default)]
    pub requirements: Option<Requirements>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub url: String,
    #[serde(default)]
    pub video_type: Option<String>,
}

/// PEGI content flags attached to a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Restrictions {
    #[serde(default)]
    pub pegi_violence: bool,
    #[serde(default)]
    pub pegi_profanity: bool,
    #[serde(default)]
    pub pegi_discrimination: bool,
    #[serde(default)]
    pub pegi_drugs: bool,
    #[serde(default)]
    pub pegi_fear: bool,
    #[serde(default)]
    pub pegi_gambling: bool,
    #[serde(default)]
    pub pegi_online: bool,
    #[serde(default)]
    pub pegi_sex: bool,
}

/// System requirement maps; the backend leaves their inner shape free-form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Requirements {
    #[serde(default)]
    pub minimal: Option<Value>,
    #[serde(default)]
    pub recommended: Option<Value>,
}

/// Query parameters for the sync-log list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncLogQuery {
    pub skip: u32,
    pub limit: u32,
}

impl Default for SyncLogQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 50 }
    }
}

/// One sync run as recorded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncLogRecord {
    pub id: i64,
    pub run_at: String,
    pub total_synced: i64,
    pub new_products: i64,
    pub updated_products: i64,
    pub inactive_products: i64,
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One page of sync logs, returned verbatim — no field defaulting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncLogPage {
    pub logs: Vec<SyncLogRecord>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}
