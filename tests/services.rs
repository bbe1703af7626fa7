use chrono::NaiveDateTime;
use mockall::predicate::eq;

use inventory_products::domain::filter::{FilterCriteria, StatusFilter};
use inventory_products::domain::product::Product;
use inventory_products::domain::reference::Category;
use inventory_products::domain::types::{CategoryId, Price, ProductId, ProductName, Stock, Tag};
use inventory_products::repository::errors::RepositoryError;
use inventory_products::repository::mock::MockRepository;
use inventory_products::services::ServiceError;
use inventory_products::services::api::list_products;
use inventory_products::services::products::{
    deactivate_product, load_products_page, reactivate_product,
};

fn product(id: i32, name: &str, price: f64) -> Product {
    Product {
        id: ProductId::new(id).unwrap(),
        name: ProductName::new(name).unwrap(),
        barcode: None,
        category_id: None,
        category: None,
        unit_id: None,
        unit: None,
        stock: Stock::new(1).unwrap(),
        price: Price::new(price).unwrap(),
        profit_margin: 0.0,
        active: true,
        created_at: NaiveDateTime::default(),
        updated_at: NaiveDateTime::default(),
    }
}

#[test]
fn page_requests_status_scope_from_repository() {
    let mut repo = MockRepository::new();
    repo.expect_list_categories().times(1).returning(|| {
        Ok(vec![Category {
            id: CategoryId::new(1).unwrap(),
            tag: Tag::new("drinks").unwrap(),
        }])
    });
    repo.expect_list_units().times(1).returning(|| Ok(vec![]));
    repo.expect_list_products()
        .withf(|query| query.status == StatusFilter::Inactive)
        .times(1)
        .returning(|_| Ok(vec![product(1, "Cheap", 2.0), product(2, "Pricey", 20.0)]));

    let criteria = FilterCriteria::new()
        .status(StatusFilter::Inactive)
        .max_price("10,0");
    let page = load_products_page(&repo, criteria).unwrap();

    assert_eq!(page.products.len(), 1);
    assert_eq!(page.products[0].name, "Cheap");
    assert_eq!(page.categories.len(), 1);
}

#[test]
fn repository_failure_surfaces_as_internal_error() {
    let mut repo = MockRepository::new();
    repo.expect_list_products()
        .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

    let result = list_products(&repo, &FilterCriteria::default());

    assert!(matches!(result, Err(ServiceError::Internal)));
}

#[test]
fn api_listing_counts_filtered_products() {
    let mut repo = MockRepository::new();
    repo.expect_list_products()
        .returning(|_| Ok(vec![product(1, "Coke", 3.5), product(2, "Bread", 5.0)]));

    let criteria = FilterCriteria::new().term("coke");
    let response = list_products(&repo, &criteria).unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.products[0].name.as_str(), "Coke");
}

#[test]
fn status_transitions_call_repository_with_id() {
    let mut repo = MockRepository::new();
    repo.expect_remove_product()
        .with(eq(ProductId::new(5).unwrap()))
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_reactivate_product()
        .with(eq(ProductId::new(6).unwrap()))
        .times(1)
        .returning(|_| Err(RepositoryError::NotFound));

    assert!(deactivate_product(&repo, 5).is_ok());
    assert!(matches!(
        reactivate_product(&repo, 6),
        Err(ServiceError::NotFound)
    ));
}
