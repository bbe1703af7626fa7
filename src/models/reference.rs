//! Diesel models for category and unit reference tables.

use diesel::prelude::*;

use crate::domain::reference::{Category as DomainCategory, Unit as DomainUnit};
use crate::domain::types::{CategoryId, Tag, TypeConstraintError, UnitId};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
/// Diesel model for [`crate::domain::reference::Category`].
pub struct Category {
    pub id: i32,
    pub tag: String,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::units)]
/// Diesel model for [`crate::domain::reference::Unit`].
pub struct Unit {
    pub id: i32,
    pub tag: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::try_from(category.id)?,
            tag: Tag::new(category.tag)?,
        })
    }
}

impl TryFrom<Unit> for DomainUnit {
    type Error = TypeConstraintError;

    fn try_from(unit: Unit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UnitId::try_from(unit.id)?,
            tag: Tag::new(unit.tag)?,
        })
    }
}
