//! Stateless HTTP request builder and response parser for the product API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; the executing methods (`list_products`, `get_product`,
//! and the convenience wrappers) compose the two over an injected
//! [`Transport`]. Failures are logged once with structured context at the
//! point of detection and then propagated unchanged — no retries, no
//! fallback values beyond the field defaulting in [`ProductPage`].

use serde::de::DeserializeOwned;

use crate::error::{check_status, ApiError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Product, ProductPage, ProductQuery};

/// Environment variable selecting the backend base URL.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

/// Fallback base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Synchronous, stateless client for the product endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from `CATALOG_API_URL`, falling back to the
    /// local development backend. Resolution happens once, here; the client
    /// is then passed around as an explicit dependency.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self, query: &ProductQuery) -> HttpRequest {
        HttpRequest {
            url: format!("{}/products/?{}", self.base_url, query_string(query)),
            headers: json_accept_headers(),
        }
    }

    /// The id is not validated locally; an empty or malformed id produces
    /// whatever the backend answers, typically a 404.
    pub fn build_get_product(&self, id: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/products/{id}", self.base_url),
            headers: json_accept_headers(),
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<ProductPage, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Fetch one page of products matching `query`.
    pub fn list_products(
        &self,
        transport: &impl Transport,
        query: &ProductQuery,
    ) -> Result<ProductPage, ApiError> {
        self.dispatch(transport, self.build_list_products(query), "product list")
    }

    /// Fetch products whose name matches `term`. Injects `term` as the
    /// `search` filter and delegates; no independent validation.
    pub fn search_products(
        &self,
        transport: &impl Transport,
        term: &str,
        query: &ProductQuery,
    ) -> Result<ProductPage, ApiError> {
        let query = ProductQuery {
            search: Some(term.to_string()),
            ..query.clone()
        };
        self.list_products(transport, &query)
    }

    /// Fetch products in the named category. Injects `name` as the
    /// `category` filter and delegates; no independent validation.
    pub fn products_by_category(
        &self,
        transport: &impl Transport,
        name: &str,
        query: &ProductQuery,
    ) -> Result<ProductPage, ApiError> {
        let query = ProductQuery {
            category: Some(name.to_string()),
            ..query.clone()
        };
        self.list_products(transport, &query)
    }

    /// Fetch a single product by id. The body passes through with field-level
    /// serde defaults only — no page-style normalization.
    pub fn get_product(&self, transport: &impl Transport, id: &str) -> Result<Product, ApiError> {
        self.dispatch(transport, self.build_get_product(id), "product fetch")
    }

    /// Execute one request and deserialize the 2xx body, logging each failure
    /// path once before propagating it.
    fn dispatch<T: DeserializeOwned>(
        &self,
        transport: &impl Transport,
        request: HttpRequest,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let response = match transport.get(&request) {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    url = %request.url,
                    error = %err,
                    "{operation} request failed before a response was obtained"
                );
                return Err(ApiError::Network(err));
            }
        };
        if let Err(err) = check_status(&response) {
            if let ApiError::Http {
                status,
                status_text,
                body,
            } = &err
            {
                tracing::error!(
                    status = *status,
                    status_text = %status_text,
                    url = %request.url,
                    body = %body,
                    "{operation} request rejected by backend"
                );
            }
            return Err(err);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Serialize a [`ProductQuery`] per the inclusion invariant: `skip` and
/// `limit` always, strings only when non-empty after trimming, price bounds
/// only when present and non-negative.
fn query_string(query: &ProductQuery) -> String {
    let mut pairs = vec![
        format!("skip={}", query.skip),
        format!("limit={}", query.limit),
    ];
    if let Some(search) = &query.search {
        let search = search.trim();
        if !search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
    }
    if let Some(category) = &query.category {
        let category = category.trim();
        if !category.is_empty() {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
    }
    if let Some(min_price) = query.min_price {
        if min_price >= 0.0 {
            pairs.push(format!("min_price={min_price}"));
        }
    }
    if let Some(max_price) = query.max_price {
        if max_price >= 0.0 {
            pairs.push(format!("max_price={max_price}"));
        }
    }
    pairs.join("&")
}

fn json_accept_headers() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}
