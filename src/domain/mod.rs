//! Domain entities and value objects of the product catalogue.

pub mod filter;
pub mod product;
pub mod reference;
pub mod types;
