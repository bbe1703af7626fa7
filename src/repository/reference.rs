use diesel::prelude::*;

use crate::domain::reference::{Category, Unit};
use crate::models::reference::{Category as DbCategory, Unit as DbUnit};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, DieselRepository, UnitReader};
use crate::schema::{categories, units};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut conn = self.conn()?;

        categories::table
            .order(categories::tag.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(|c| Category::try_from(c).map_err(RepositoryError::from))
            .collect()
    }
}

impl UnitReader for DieselRepository {
    fn list_units(&self) -> RepositoryResult<Vec<Unit>> {
        let mut conn = self.conn()?;

        units::table
            .order(units::tag.asc())
            .load::<DbUnit>(&mut conn)?
            .into_iter()
            .map(|u| Unit::try_from(u).map_err(RepositoryError::from))
            .collect()
    }
}
