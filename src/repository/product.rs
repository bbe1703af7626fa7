use chrono::Utc;
use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, ProductWithTags, UpdateProduct as DbUpdateProduct,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};
use crate::schema::{categories, products, units};

fn into_domain(rows: Vec<ProductWithTags>) -> RepositoryResult<Vec<Product>> {
    rows.into_iter()
        .map(|row| Product::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl DieselRepository {
    fn set_product_active(&self, id: ProductId, active: bool) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let affected = diesel::update(products::table.find(id.get()))
            .set((
                products::active.eq(active),
                products::updated_at.eq(Utc::now().naive_utc()),
            ))
            .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl ProductReader for DieselRepository {
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;

        let mut items = products::table
            .left_join(categories::table)
            .left_join(units::table)
            .select((
                products::all_columns,
                categories::tag.nullable(),
                units::tag.nullable(),
            ))
            .order((products::name.asc(), products::id.asc()))
            .into_boxed();

        if let Some(active) = query.status.active_flag() {
            items = items.filter(products::active.eq(active));
        }

        let rows = items.load::<ProductWithTags>(&mut conn)?;
        into_domain(rows)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;

        let row = products::table
            .left_join(categories::table)
            .left_join(units::table)
            .filter(products::id.eq(id.get()))
            .select((
                products::all_columns,
                categories::tag.nullable(),
                units::tag.nullable(),
            ))
            .first::<ProductWithTags>(&mut conn)
            .optional()?;

        row.map(Product::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl ProductWriter for DieselRepository {
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewProduct> = new_products.iter().map(Into::into).collect();
        let affected = diesel::insert_into(products::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product> {
        {
            let mut conn = self.conn()?;
            let changes = DbUpdateProduct::new(updates, Utc::now().naive_utc());

            let affected = diesel::update(products::table.find(id.get()))
                .set(&changes)
                .execute(&mut conn)?;

            if affected == 0 {
                return Err(RepositoryError::NotFound);
            }
        }

        self.get_product_by_id(id)?
            .ok_or(RepositoryError::NotFound)
    }

    fn remove_product(&self, id: ProductId) -> RepositoryResult<()> {
        self.set_product_active(id, false)
    }

    fn reactivate_product(&self, id: ProductId) -> RepositoryResult<()> {
        self.set_product_active(id, true)
    }
}
