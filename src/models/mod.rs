//! Database models shared across the catalogue repository.

pub mod config;
pub mod product;
pub mod reference;
