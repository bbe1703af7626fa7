//! Query and form payloads for the product screens.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::filter::{FilterCriteria, StatusFilter};
use crate::domain::product::{NewProduct, UpdateProduct};
use crate::domain::types::{
    CategoryId, Price, ProductName, Stock, TypeConstraintError, UnitId, parse_decimal,
};
use crate::forms::FormError;

/// Listing filters as they arrive in the query string.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProductFilterQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
}

impl ProductFilterQuery {
    /// Parses a raw query string. A repeated key keeps its last value and
    /// unknown keys are ignored, so one bad pair never drops the others.
    pub fn from_query_string(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed listing query {query:?}: {err}");
            Vec::new()
        });

        pairs.into_iter().fold(Self::default(), |mut parsed, (key, value)| {
            let slot = match key.as_str() {
                "q" => &mut parsed.q,
                "category" => &mut parsed.category,
                "unit" => &mut parsed.unit,
                "status" => &mut parsed.status,
                "min_price" => &mut parsed.min_price,
                "max_price" => &mut parsed.max_price,
                _ => return parsed,
            };
            *slot = Some(value);
            parsed
        })
    }

    /// Encodes the filters back into a query string.
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProductFilterQuery> for FilterCriteria {
    fn from(query: ProductFilterQuery) -> Self {
        Self {
            term: query.q.unwrap_or_default(),
            category: non_blank(query.category),
            unit: non_blank(query.unit),
            status: StatusFilter::from_param(query.status.as_deref()),
            min_price: query.min_price.unwrap_or_default(),
            max_price: query.max_price.unwrap_or_default(),
        }
    }
}

impl From<&FilterCriteria> for ProductFilterQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            q: Some(criteria.term.clone()),
            category: criteria.category.clone(),
            unit: criteria.unit.clone(),
            status: Some(criteria.status.as_str().to_string()),
            min_price: Some(criteria.min_price.clone()),
            max_price: Some(criteria.max_price.clone()),
        }
    }
}

/// Hidden field carried by the row action forms so the listing can be
/// re-rendered with the same filters afterwards.
#[derive(Debug, Default, Deserialize)]
pub struct ReturnToForm {
    #[serde(default)]
    pub query: String,
}

impl ReturnToForm {
    /// Listing URL preserving the submitted query string.
    pub fn location(&self) -> String {
        let query = self.query.trim().trim_start_matches('?');
        if query.is_empty() || query.contains(['#', '\r', '\n']) {
            "/".to_string()
        } else {
            format!("/?{query}")
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
/// Form data for creating or editing a product.
pub struct ProductForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 64))]
    pub barcode: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub unit_id: String,
    #[serde(default)]
    pub stock: String,
    #[validate(length(min = 1))]
    pub price: String,
    #[serde(default)]
    pub profit_margin: String,
}

/// Validated product fields shared by create and update.
struct ProductPayload {
    name: ProductName,
    barcode: Option<String>,
    category_id: Option<CategoryId>,
    unit_id: Option<UnitId>,
    stock: Stock,
    price: Price,
    profit_margin: f64,
}

fn optional_id<T, F>(raw: &str, err: F) -> Result<Option<T>, FormError>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
    F: FnOnce() -> FormError,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .ok()
        .and_then(|v| T::try_from(v).ok())
        .map(Some)
        .ok_or_else(err)
}

impl ProductForm {
    fn payload(&self) -> Result<ProductPayload, FormError> {
        self.validate()?;

        let name = ProductName::new(self.name.as_str())
            .map_err(|_| FormError::InvalidName)?;
        let price = self
            .price
            .parse::<Price>()
            .map_err(|_| FormError::InvalidPrice)?;
        let stock = match self.stock.trim() {
            "" => Stock::default(),
            raw => raw
                .parse::<i32>()
                .ok()
                .and_then(|v| Stock::new(v).ok())
                .ok_or(FormError::InvalidStock)?,
        };
        let profit_margin = if self.profit_margin.trim().is_empty() {
            0.0
        } else {
            parse_decimal(&self.profit_margin).ok_or(FormError::InvalidMargin)?
        };

        Ok(ProductPayload {
            name,
            barcode: Some(self.barcode.clone()),
            category_id: optional_id(&self.category_id, || FormError::InvalidCategoryId)?,
            unit_id: optional_id(&self.unit_id, || FormError::InvalidUnitId)?,
            stock,
            price,
            profit_margin,
        })
    }

    /// Validates the form and converts it into a new, active product.
    pub fn to_new_product(&self) -> Result<NewProduct, FormError> {
        let p = self.payload()?;
        Ok(NewProduct::new(
            p.name,
            p.barcode,
            p.category_id,
            p.unit_id,
            p.stock,
            p.price,
            p.profit_margin,
        ))
    }

    /// Validates the form and converts it into an update payload.
    pub fn to_update_product(&self) -> Result<UpdateProduct, FormError> {
        let p = self.payload()?;
        Ok(UpdateProduct::new(
            p.name,
            p.barcode,
            p.category_id,
            p.unit_id,
            p.stock,
            p.price,
            p.profit_margin,
        ))
    }
}
