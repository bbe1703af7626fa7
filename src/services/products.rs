use crate::domain::filter::FilterCriteria;
use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::dto::products::{ProductFormData, ProductRow, ProductsPageData};
use crate::forms::products::ProductForm;
use crate::repository::{
    CategoryReader, ProductListQuery, ProductReader, ProductWriter, UnitReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the products in the criteria's status scope and narrows them with
/// the remaining filters.
pub fn list_filtered_products<R>(repo: &R, criteria: &FilterCriteria) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let fetched = repo
        .list_products(ProductListQuery::new().status(criteria.status))
        .map_err(|err| {
            log::error!("Failed to list products: {err}");
            err
        })?;

    Ok(criteria.apply(fetched))
}

/// Loads everything the listing page shows: filter options and matching rows.
pub fn load_products_page<R>(repo: &R, criteria: FilterCriteria) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + CategoryReader + UnitReader + ?Sized,
{
    let categories = repo.list_categories().map_err(|err| {
        log::error!("Failed to list categories: {err}");
        err
    })?;
    let units = repo.list_units().map_err(|err| {
        log::error!("Failed to list units: {err}");
        err
    })?;

    let products = list_filtered_products(repo, &criteria)?
        .iter()
        .map(ProductRow::from)
        .collect();

    Ok(ProductsPageData {
        products,
        categories,
        units,
        criteria,
    })
}

/// Criteria the listing falls back to when the filters are cleared.
pub fn clear_filters() -> FilterCriteria {
    FilterCriteria::default()
}

fn product_id(id: i32) -> ServiceResult<ProductId> {
    ProductId::new(id).map_err(ServiceError::from)
}

/// Logically removes the product by marking it inactive.
pub fn deactivate_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let id = product_id(id)?;
    repo.remove_product(id).map_err(|err| {
        log::error!("Failed to deactivate product {id}: {err}");
        ServiceError::from(err)
    })
}

/// Returns a removed product to the active listing.
pub fn reactivate_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let id = product_id(id)?;
    repo.reactivate_product(id).map_err(|err| {
        log::error!("Failed to reactivate product {id}: {err}");
        ServiceError::from(err)
    })
}

/// Loads the reference data for the product form and, when editing, the product.
pub fn load_product_form<R>(repo: &R, id: Option<i32>) -> ServiceResult<ProductFormData>
where
    R: ProductReader + CategoryReader + UnitReader + ?Sized,
{
    let product = match id {
        Some(id) => Some(
            repo.get_product_by_id(product_id(id)?)?
                .ok_or(ServiceError::NotFound)?,
        ),
        None => None,
    };

    Ok(ProductFormData {
        product,
        categories: repo.list_categories()?,
        units: repo.list_units()?,
    })
}

/// Validates the form and persists a new active product.
pub fn create_product<R>(repo: &R, form: &ProductForm) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form.to_new_product().map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        ServiceError::from(err)
    })?;

    repo.create_products(&[new_product]).map_err(|err| {
        log::error!("Failed to add a product: {err}");
        ServiceError::from(err)
    })?;

    Ok(())
}

/// Validates the form and applies it to an existing product.
pub fn update_product<R>(repo: &R, id: i32, form: &ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let id = product_id(id)?;
    let updates = form.to_update_product().map_err(|err| {
        log::error!("Failed to validate product form: {err}");
        ServiceError::from(err)
    })?;

    repo.update_product(id, &updates).map_err(|err| {
        log::error!("Failed to update product {id}: {err}");
        ServiceError::from(err)
    })
}
