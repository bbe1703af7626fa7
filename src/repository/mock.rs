//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::reference::{Category, Unit};
use crate::domain::types::ProductId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, ProductListQuery, ProductReader, ProductWriter, UnitReader};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    }

    impl ProductWriter for Repository {
        fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
        fn update_product(
            &self,
            id: ProductId,
            updates: &UpdateProduct,
        ) -> RepositoryResult<Product>;
        fn remove_product(&self, id: ProductId) -> RepositoryResult<()>;
        fn reactivate_product(&self, id: ProductId) -> RepositoryResult<()>;
    }

    impl CategoryReader for Repository {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }

    impl UnitReader for Repository {
        fn list_units(&self) -> RepositoryResult<Vec<Unit>>;
    }
}
