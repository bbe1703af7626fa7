use crate::domain::filter::FilterCriteria;
use crate::dto::api::ProductsResponse;
use crate::repository::ProductReader;
use crate::services::ServiceResult;
use crate::services::products::list_filtered_products;

/// Returns the products matching the criteria for the JSON API.
pub fn list_products<R>(repo: &R, criteria: &FilterCriteria) -> ServiceResult<ProductsResponse>
where
    R: ProductReader + ?Sized,
{
    let products = list_filtered_products(repo, criteria)?;

    Ok(ProductsResponse {
        total: products.len(),
        products,
    })
}
