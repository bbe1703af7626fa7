//! DTOs exposed by the catalogue API endpoints.

use serde::Serialize;

use crate::domain::product::Product;

/// Result payload returned by [`crate::services::api::list_products`].
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    /// Number of products matching the filters.
    pub total: usize,
    /// Matching products in listing order.
    pub products: Vec<Product>,
}
