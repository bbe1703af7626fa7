use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, Price, ProductId, ProductName, Stock, Tag, UnitId};

/// Product as shown in the listing, with category and unit resolved to tags.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub barcode: Option<String>,
    pub category_id: Option<CategoryId>,
    pub category: Option<Tag>,
    pub unit_id: Option<UnitId>,
    pub unit: Option<Tag>,
    pub stock: Stock,
    pub price: Price,
    /// Profit margin as a percentage.
    pub profit_margin: f64,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: ProductName,
    pub barcode: Option<String>,
    pub category_id: Option<CategoryId>,
    pub unit_id: Option<UnitId>,
    pub stock: Stock,
    pub price: Price,
    pub profit_margin: f64,
    pub active: bool,
}

impl NewProduct {
    /// Builds an active product, dropping a blank barcode.
    #[must_use]
    pub fn new(
        name: ProductName,
        barcode: Option<String>,
        category_id: Option<CategoryId>,
        unit_id: Option<UnitId>,
        stock: Stock,
        price: Price,
        profit_margin: f64,
    ) -> Self {
        Self {
            name,
            barcode: normalize_barcode(barcode),
            category_id,
            unit_id,
            stock,
            price,
            profit_margin,
            active: true,
        }
    }

    /// Marks the product inactive on creation.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: ProductName,
    pub barcode: Option<String>,
    pub category_id: Option<CategoryId>,
    pub unit_id: Option<UnitId>,
    pub stock: Stock,
    pub price: Price,
    pub profit_margin: f64,
}

impl UpdateProduct {
    #[must_use]
    pub fn new(
        name: ProductName,
        barcode: Option<String>,
        category_id: Option<CategoryId>,
        unit_id: Option<UnitId>,
        stock: Stock,
        price: Price,
        profit_margin: f64,
    ) -> Self {
        Self {
            name,
            barcode: normalize_barcode(barcode),
            category_id,
            unit_id,
            stock,
            price,
            profit_margin,
        }
    }
}

fn normalize_barcode(barcode: Option<String>) -> Option<String> {
    barcode
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
