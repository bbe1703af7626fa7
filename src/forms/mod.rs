//! Form definitions backing the catalogue routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod products;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid price")]
    InvalidPrice,

    #[error("invalid profit margin")]
    InvalidMargin,

    #[error("invalid stock quantity")]
    InvalidStock,

    #[error("invalid category id")]
    InvalidCategoryId,

    #[error("invalid unit id")]
    InvalidUnitId,
}
