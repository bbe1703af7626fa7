use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::filter::StatusFilter;
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::reference::{Category, Unit};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod product;
pub mod reference;

/// Diesel-backed repository shared by every reader/writer trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Query executed against the product table.
///
/// Only the status scope is resolved in SQL; the remaining listing filters run
/// in memory over the result.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub status: StatusFilter,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }
}

pub trait ProductReader {
    /// Products in the requested status scope, ordered by name.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

pub trait ProductWriter {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product>;
    /// Logically removes a product by marking it inactive.
    fn remove_product(&self, id: ProductId) -> RepositoryResult<()>;
    /// Marks a previously removed product active again.
    fn reactivate_product(&self, id: ProductId) -> RepositoryResult<()>;
}

pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

pub trait UnitReader {
    fn list_units(&self) -> RepositoryResult<Vec<Unit>>;
}
