//! Axum mock of the catalog backend, serving seeded fixture data.
//!
//! Implements the three endpoints the core crate consumes: `/products/` with
//! the backend's filter semantics (active products only, case-insensitive
//! name search, category-name substring match, price bounds on `min_price`),
//! `/products/{id}`, and `/sync-logs/`. DTOs are defined independently from
//! the core crate; integration tests catch schema drift.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub min_price: Option<f64>,
    pub retail_min_price: Option<f64>,
    pub available_to_buy: bool,
    pub is_active: bool,
    pub thumbnail: Option<String>,
    pub platform: Option<String>,
    pub developer: Option<String>,
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncLog {
    pub id: i64,
    pub run_at: String,
    pub total_synced: i64,
    pub new_products: i64,
    pub updated_products: i64,
    pub inactive_products: i64,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Serialize)]
struct ProductListResponse {
    products: Vec<Product>,
    total: usize,
    skip: usize,
    limit: usize,
}

#[derive(Serialize)]
struct SyncLogListResponse {
    logs: Vec<SyncLog>,
    total: usize,
    skip: usize,
    limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_product_limit")]
    pub limit: usize,
    pub search: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn default_product_limit() -> usize {
    100
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_product_limit(),
            search: None,
            category: None,
            min_price: None,
            max_price: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SyncLogListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_sync_log_limit")]
    pub limit: usize,
}

fn default_sync_log_limit() -> usize {
    50
}

pub struct CatalogData {
    pub products: Vec<Product>,
    pub sync_logs: Vec<SyncLog>,
}

pub type Catalog = Arc<CatalogData>;

pub fn app() -> Router {
    let catalog: Catalog = Arc::new(CatalogData {
        products: seed_products(),
        sync_logs: seed_sync_logs(),
    });
    Router::new()
        .route("/products/", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/sync-logs/", get(list_sync_logs))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_products(
    State(catalog): State<Catalog>,
    Query(query): Query<ProductListQuery>,
) -> Json<ProductListResponse> {
    let matches = filter_products(&catalog.products, &query);
    let total = matches.len();
    let products = matches
        .into_iter()
        .skip(query.skip)
        .take(query.limit)
        .cloned()
        .collect();
    Json(ProductListResponse {
        products,
        total,
        skip: query.skip,
        limit: query.limit,
    })
}

async fn get_product(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Result<Json<Product>, StatusCode> {
    catalog
        .products
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_sync_logs(
    State(catalog): State<Catalog>,
    Query(query): Query<SyncLogListQuery>,
) -> Json<SyncLogListResponse> {
    let total = catalog.sync_logs.len();
    let logs = catalog
        .sync_logs
        .iter()
        .skip(query.skip)
        .take(query.limit)
        .cloned()
        .collect();
    Json(SyncLogListResponse {
        logs,
        total,
        skip: query.skip,
        limit: query.limit,
    })
}

/// Apply the backend's product filters; `total` is counted on the filtered
/// set, before pagination.
fn filter_products<'a>(products: &'a [Product], query: &ProductListQuery) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.is_active)
        .filter(|p| match &query.search {
            Some(term) => p.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        })
        .filter(|p| match &query.category {
            Some(name) => p
                .categories
                .iter()
                .any(|c| c.name.to_lowercase().contains(&name.to_lowercase())),
            None => true,
        })
        .filter(|p| match query.min_price {
            Some(min) => p.min_price.is_some_and(|price| price >= min),
            None => true,
        })
        .filter(|p| match query.max_price {
            Some(max) => p.min_price.is_some_and(|price| price <= max),
            None => true,
        })
        .collect()
}

fn seed_products() -> Vec<Product> {
    vec![
        product(
            "10000000195012",
            "Stellar Vanguard",
            29.99,
            "steam",
            "Strategy",
            true,
            true,
        ),
        product(
            "10000000202019",
            "Dusk Tactics",
            14.99,
            "steam",
            "Strategy",
            true,
            true,
        ),
        product(
            "10000000415008",
            "Neon Drift Rally",
            49.99,
            "epic",
            "Racing",
            true,
            true,
        ),
        product(
            "10000000515006",
            "Harvest Lane",
            9.99,
            "gog",
            "Simulation",
            false,
            true,
        ),
        product(
            "10000000702004",
            "Iron Accord",
            59.99,
            "steam",
            "Action",
            true,
            true,
        ),
        // Discontinued upstream; must never appear in listings.
        product(
            "10000000737012",
            "Forgotten Depths",
            4.99,
            "steam",
            "Adventure",
            false,
            false,
        ),
    ]
}

fn product(
    id: &str,
    name: &str,
    min_price: f64,
    platform: &str,
    category: &str,
    available_to_buy: bool,
    is_active: bool,
) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    Product {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.clone(),
        kind: Some("game".to_string()),
        min_price: Some(min_price),
        retail_min_price: Some(min_price * 1.2),
        available_to_buy,
        is_active,
        thumbnail: Some(format!("https://cdn.example.com/{slug}/thumb.jpg")),
        platform: Some(platform.to_string()),
        developer: None,
        categories: vec![Category {
            id: format!("c-{}", category.to_lowercase()),
            name: category.to_string(),
        }],
    }
}

fn seed_sync_logs() -> Vec<SyncLog> {
    vec![
        SyncLog {
            id: 3,
            run_at: "2024-03-02T04:00:00Z".to_string(),
            total_synced: 1480,
            new_products: 52,
            updated_products: 1403,
            inactive_products: 25,
            status: "success".to_string(),
            error_message: None,
        },
        SyncLog {
            id: 2,
            run_at: "2024-03-01T04:00:00Z".to_string(),
            total_synced: 1460,
            new_products: 31,
            updated_products: 1260,
            inactive_products: 169,
            status: "partial".to_string(),
            error_message: Some("upstream timeout on page 9".to_string()),
        },
        SyncLog {
            id: 1,
            run_at: "2024-02-29T04:00:00Z".to_string(),
            total_synced: 0,
            new_products: 0,
            updated_products: 0,
            inactive_products: 0,
            status: "failed".to_string(),
            error_message: Some("upstream catalog unreachable".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_kind_under_wire_name_type() {
        let json = serde_json::to_value(&seed_products()[0]).unwrap();
        assert_eq!(json["type"], "game");
        assert_eq!(json["id"], "10000000195012");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn inactive_products_are_never_listed() {
        let products = seed_products();
        let visible = filter_products(&products, &ProductListQuery::default());
        assert_eq!(visible.len(), 5);
        assert!(visible.iter().all(|p| p.is_active));
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let products = seed_products();
        let query = ProductListQuery {
            search: Some("DUSK".to_string()),
            ..Default::default()
        };
        let found = filter_products(&products, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Dusk Tactics");
    }

    #[test]
    fn category_matches_on_substring() {
        let products = seed_products();
        let query = ProductListQuery {
            category: Some("strat".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_products(&products, &query).len(), 2);
    }

    #[test]
    fn price_bounds_apply_to_min_price() {
        let products = seed_products();
        let query = ProductListQuery {
            min_price: Some(10.0),
            max_price: Some(50.0),
            ..Default::default()
        };
        let found = filter_products(&products, &query);
        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .all(|p| p.min_price.is_some_and(|v| (10.0..=50.0).contains(&v))));
    }

    #[test]
    fn sync_logs_are_most_recent_first() {
        let logs = seed_sync_logs();
        assert!(logs.windows(2).all(|w| w[0].run_at >= w[1].run_at));
    }
}
