//! Listing filters applied to the status-scoped product fetch.
//!
//! Status is resolved by the repository query; everything else in
//! [`FilterCriteria`] runs in memory over the fetched rows and never reorders
//! them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::product::Product;
use crate::domain::types::{TypeConstraintError, parse_decimal};
use crate::search::{Searchable, filter_by_term};

/// Fields matched by the free-text term.
pub const SEARCH_FIELDS: [&str; 2] = ["name", "barcode"];

/// Which products the repository should return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    Active,
    Inactive,
    Both,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [Self::Active, Self::Inactive, Self::Both];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Both => "both",
        }
    }

    /// Parses a request value, falling back to [`StatusFilter::Active`] when it
    /// is missing, blank or unknown.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    /// Value the `active` column must hold, or `None` when unrestricted.
    pub const fn active_flag(self) -> Option<bool> {
        match self {
            Self::Active => Some(true),
            Self::Inactive => Some(false),
            Self::Both => None,
        }
    }

    /// Whether a product with the given flag belongs to this scope.
    pub const fn admits(self, active: bool) -> bool {
        match self {
            Self::Active => active,
            Self::Inactive => !active,
            Self::Both => true,
        }
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "ativos" => Ok(Self::Active),
            "inactive" | "inativos" => Ok(Self::Inactive),
            "both" | "ambos" => Ok(Self::Both),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown status `{other}`"
            ))),
        }
    }
}

impl Searchable for Product {
    fn search_field(&self, field: &str) -> Option<&str> {
        match field {
            "name" => Some(self.name.as_str()),
            "barcode" => self.barcode.as_deref(),
            _ => None,
        }
    }
}

/// User-chosen filter values for one listing request.
///
/// Price bounds are kept as the raw text typed by the user and parsed
/// leniently on every run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub term: String,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub status: StatusFilter,
    pub min_price: String,
    pub max_price: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn min_price(mut self, value: impl Into<String>) -> Self {
        self.min_price = value.into();
        self
    }

    pub fn max_price(mut self, value: impl Into<String>) -> Self {
        self.max_price = value.into();
        self
    }

    /// Parsed lower price bound; `None` when blank or unparsable.
    pub fn min_bound(&self) -> Option<f64> {
        lenient_bound("min_price", &self.min_price)
    }

    /// Parsed upper price bound; `None` when blank or unparsable.
    pub fn max_bound(&self) -> Option<f64> {
        lenient_bound("max_price", &self.max_price)
    }

    /// Narrows an already status-scoped fetch to the rows matching every
    /// other criterion, in input order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let mut filtered = filter_by_term(products, &self.term, &SEARCH_FIELDS);

        if let Some(category) = self.category.as_deref() {
            filtered.retain(|p| p.category.as_deref() == Some(category));
        }
        if let Some(unit) = self.unit.as_deref() {
            filtered.retain(|p| p.unit.as_deref() == Some(unit));
        }
        if let Some(min) = self.min_bound() {
            filtered.retain(|p| p.price.get() >= min);
        }
        if let Some(max) = self.max_bound() {
            filtered.retain(|p| p.price.get() <= max);
        }

        filtered
    }
}

fn lenient_bound(name: &str, raw: &str) -> Option<f64> {
    if raw.trim().is_empty() {
        return None;
    }
    let parsed = parse_decimal(raw);
    if parsed.is_none() {
        log::debug!("Ignoring unparsable {name} filter: {raw:?}");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::types::{Price, ProductId, ProductName, Stock, Tag};

    fn product(id: i32, name: &str, barcode: Option<&str>, price: f64) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: ProductName::new(name).unwrap(),
            barcode: barcode.map(str::to_string),
            category_id: None,
            category: None,
            unit_id: None,
            unit: None,
            stock: Stock::new(10).unwrap(),
            price: Price::new(price).unwrap(),
            profit_margin: 25.0,
            active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn tagged(mut p: Product, category: Option<&str>, unit: Option<&str>) -> Product {
        p.category = category.map(|c| Tag::new(c).unwrap());
        p.unit = unit.map(|u| Tag::new(u).unwrap());
        p
    }

    fn catalogue() -> Vec<Product> {
        vec![
            tagged(
                product(1, "Coke", Some("111"), 3.5),
                Some("drinks"),
                Some("can"),
            ),
            tagged(product(2, "Bread", None, 5.0), Some("bakery"), Some("kg")),
            tagged(
                product(3, "Orange Juice", Some("333"), 7.25),
                Some("drinks"),
                Some("l"),
            ),
            tagged(product(4, "Cake", Some("444"), 10.0), Some("bakery"), None),
            tagged(product(5, "Water", Some("coke-555"), 12.0), None, Some("l")),
        ]
    }

    fn ids(products: &[Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn default_criteria_return_input_unchanged() {
        let input = catalogue();
        let result = FilterCriteria::default().apply(input.clone());
        assert_eq!(result, input);
        assert_eq!(FilterCriteria::default().status, StatusFilter::Active);
    }

    #[test]
    fn term_matches_name_or_barcode_ignoring_case() {
        let result = FilterCriteria::new().term("  COKE ").apply(catalogue());
        assert_eq!(ids(&result), vec![1, 5]);

        let result = FilterCriteria::new().term("33").apply(catalogue());
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn every_match_contains_term_and_none_is_missed() {
        let term = "a";
        let result = FilterCriteria::new().term(term).apply(catalogue());
        let contains = |p: &Product| {
            p.name.to_lowercase().contains(term)
                || p
                    .barcode
                    .as_deref()
                    .is_some_and(|b| b.to_lowercase().contains(term))
        };
        assert!(result.iter().all(contains));
        let expected: Vec<i32> = catalogue()
            .iter()
            .filter(|p| contains(p))
            .map(|p| p.id.get())
            .collect();
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let result = FilterCriteria::new().category("drinks").apply(catalogue());
        assert_eq!(ids(&result), vec![1, 3]);

        let result = FilterCriteria::new().category("Drinks").apply(catalogue());
        assert!(result.is_empty());
    }

    #[test]
    fn unit_filter_uses_exact_match() {
        let result = FilterCriteria::new().unit("l").apply(catalogue());
        assert_eq!(ids(&result), vec![3, 5]);
    }

    #[test]
    fn comma_and_period_bounds_are_equivalent() {
        let comma = FilterCriteria::new().min_price("10,50");
        let period = FilterCriteria::new().min_price("10.50");
        assert_eq!(comma.min_bound(), Some(10.5));
        assert_eq!(comma.apply(catalogue()), period.apply(catalogue()));
        assert_eq!(ids(&comma.apply(catalogue())), vec![5]);
    }

    #[test]
    fn unparsable_bounds_are_ignored() {
        let garbage = FilterCriteria::new().min_price("abc").max_price("1..2");
        let blank = FilterCriteria::new();
        assert_eq!(garbage.min_bound(), None);
        assert_eq!(garbage.apply(catalogue()), blank.apply(catalogue()));
    }

    #[test]
    fn non_finite_bounds_are_ignored() {
        for raw in ["inf", "-inf", "NaN", "infinity"] {
            let criteria = FilterCriteria::new().min_price(raw).max_price(raw);
            assert_eq!(criteria.min_bound(), None);
            assert_eq!(criteria.max_bound(), None);
            assert_eq!(criteria.apply(catalogue()), catalogue());
        }
    }

    #[test]
    fn price_range_is_inclusive_and_may_be_empty() {
        let result = FilterCriteria::new()
            .min_price("5")
            .max_price("10")
            .apply(catalogue());
        assert_eq!(ids(&result), vec![2, 3, 4]);
        assert!(result.iter().all(|p| (5.0..=10.0).contains(&p.price.get())));

        let result = FilterCriteria::new()
            .min_price("20")
            .max_price("30")
            .apply(catalogue());
        assert!(result.is_empty());
    }

    #[test]
    fn criteria_combine() {
        let result = FilterCriteria::new()
            .term("c")
            .category("bakery")
            .max_price("10")
            .apply(catalogue());
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn status_parsing_accepts_legacy_values() {
        assert_eq!("ativos".parse::<StatusFilter>(), Ok(StatusFilter::Active));
        assert_eq!(
            "Inactive".parse::<StatusFilter>(),
            Ok(StatusFilter::Inactive)
        );
        assert_eq!("ambos".parse::<StatusFilter>(), Ok(StatusFilter::Both));
        assert!("all".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::from_param(Some("")), StatusFilter::Active);
        assert_eq!(StatusFilter::from_param(None), StatusFilter::Active);
        assert_eq!(StatusFilter::from_param(Some("both")), StatusFilter::Both);
    }

    #[test]
    fn status_scope_admits_flags() {
        assert!(StatusFilter::Active.admits(true));
        assert!(!StatusFilter::Active.admits(false));
        assert!(StatusFilter::Inactive.admits(false));
        assert!(StatusFilter::Both.admits(true));
        assert!(StatusFilter::Both.admits(false));
        assert_eq!(StatusFilter::Inactive.active_flag(), Some(false));
        assert_eq!(StatusFilter::Both.active_flag(), None);
    }
}
