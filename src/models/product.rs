use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::{
    CategoryId, Price, ProductId, ProductName, Stock, Tag, TypeConstraintError, UnitId,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub barcode: Option<String>,
    pub category_id: Option<i32>,
    pub unit_id: Option<i32>,
    pub stock: i32,
    pub price: f64,
    pub profit_margin: f64,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Product row joined with its category and unit tags.
pub type ProductWithTags = (Product, Option<String>, Option<String>);

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub barcode: Option<&'a str>,
    pub category_id: Option<i32>,
    pub unit_id: Option<i32>,
    pub stock: i32,
    pub price: f64,
    pub profit_margin: f64,
    pub active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub barcode: Option<&'a str>,
    pub category_id: Option<i32>,
    pub unit_id: Option<i32>,
    pub stock: i32,
    pub price: f64,
    pub profit_margin: f64,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ProductWithTags> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from((product, category, unit): ProductWithTags) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::try_from(product.id)?,
            name: ProductName::new(product.name)?,
            barcode: product.barcode,
            category_id: product.category_id.map(CategoryId::try_from).transpose()?,
            category: category.map(Tag::new).transpose()?,
            unit_id: product.unit_id.map(UnitId::try_from).transpose()?,
            unit: unit.map(Tag::new).transpose()?,
            stock: Stock::try_from(product.stock)?,
            price: Price::try_from(product.price)?,
            profit_margin: product.profit_margin,
            active: product.active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str(),
            barcode: product.barcode.as_deref(),
            category_id: product.category_id.map(CategoryId::get),
            unit_id: product.unit_id.map(UnitId::get),
            stock: product.stock.get(),
            price: product.price.get(),
            profit_margin: product.profit_margin,
            active: product.active,
        }
    }
}

impl<'a> UpdateProduct<'a> {
    /// Builds the changeset stamping `updated_at` with the given time.
    pub fn new(product: &'a DomainUpdateProduct, updated_at: NaiveDateTime) -> Self {
        Self {
            name: product.name.as_str(),
            barcode: product.barcode.as_deref(),
            category_id: product.category_id.map(CategoryId::get),
            unit_id: product.unit_id.map(UnitId::get),
            stock: product.stock.get(),
            price: product.price.get(),
            profit_margin: product.profit_margin,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn db_product(now: NaiveDateTime) -> Product {
        Product {
            id: 7,
            name: "Coke".to_string(),
            barcode: Some("111".to_string()),
            category_id: Some(2),
            unit_id: None,
            stock: 5,
            price: 3.5,
            profit_margin: 30.0,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn joined_row_into_domain() {
        let now = Utc::now().naive_utc();
        let row = (db_product(now), Some("drinks".to_string()), None);
        let domain = DomainProduct::try_from(row).unwrap();
        assert_eq!(domain.id.get(), 7);
        assert_eq!(domain.name.as_str(), "Coke");
        assert_eq!(domain.category.as_deref(), Some("drinks"));
        assert_eq!(domain.category_id.map(CategoryId::get), Some(2));
        assert!(domain.unit.is_none());
        assert_eq!(domain.price.get(), 3.5);
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn negative_price_row_is_rejected() {
        let now = Utc::now().naive_utc();
        let mut row = db_product(now);
        row.price = -1.0;
        let result = DomainProduct::try_from((row, None, None));
        assert_eq!(result, Err(TypeConstraintError::InvalidPrice));
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewProduct::new(
            ProductName::new("Bread").unwrap(),
            Some("222".to_string()),
            None,
            Some(UnitId::new(3).unwrap()),
            Stock::new(4).unwrap(),
            Price::new(5.0).unwrap(),
            10.0,
        );
        let new: NewProduct = (&domain).into();
        assert_eq!(new.name, "Bread");
        assert_eq!(new.barcode, Some("222"));
        assert_eq!(new.unit_id, Some(3));
        assert_eq!(new.category_id, None);
        assert!(new.active);
    }
}
