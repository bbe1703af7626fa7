//! Reference data offered as filter options: categories and units.

use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, Tag, UnitId};

/// Product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub tag: Tag,
}

/// Unit of measure a product is sold in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub tag: Tag,
}
