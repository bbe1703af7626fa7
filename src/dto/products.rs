use serde::Serialize;

use crate::domain::filter::{FilterCriteria, StatusFilter};
use crate::domain::product::Product;
use crate::domain::reference::{Category, Unit};

/// One rendered line of the product table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub id: i32,
    pub barcode: String,
    pub name: String,
    pub category: String,
    pub stock: i32,
    pub price: String,
    pub margin: String,
    pub unit: String,
    pub active: bool,
    pub status: &'static str,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.get(),
            barcode: product.barcode.clone().unwrap_or_else(|| "-".to_string()),
            name: product.name.to_string(),
            category: product
                .category
                .as_ref()
                .map_or_else(|| "N/D".to_string(), ToString::to_string),
            stock: product.stock.get(),
            price: format!("R$ {:.2}", product.price.get()),
            margin: format!("{}%", product.profit_margin),
            unit: product
                .unit
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
            active: product.active,
            status: if product.active { "Active" } else { "Inactive" },
        }
    }
}

/// Option of the status dropdown.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatusOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Builds the status dropdown with the current scope selected.
pub fn status_options(current: StatusFilter) -> Vec<StatusOption> {
    StatusFilter::ALL
        .iter()
        .map(|&status| StatusOption {
            value: status.as_str(),
            label: match status {
                StatusFilter::Active => "Active",
                StatusFilter::Inactive => "Inactive",
                StatusFilter::Both => "Both",
            },
            selected: status == current,
        })
        .collect()
}

/// Data required to render the product listing template.
#[derive(Debug)]
pub struct ProductsPageData {
    /// Rows left after every filter, in listing order.
    pub products: Vec<ProductRow>,
    pub categories: Vec<Category>,
    pub units: Vec<Unit>,
    /// Criteria echoed back so the controls keep their values.
    pub criteria: FilterCriteria,
}

/// Data required to render the create/edit product form.
#[derive(Debug)]
pub struct ProductFormData {
    /// Product being edited; `None` on the create screen.
    pub product: Option<Product>,
    pub categories: Vec<Category>,
    pub units: Vec<Unit>,
}
