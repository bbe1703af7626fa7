//! Shared helpers for integration tests backed by a temporary SQLite file.

#![allow(dead_code)]

use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use inventory_products::db::{DbPool, establish_connection_pool};
use inventory_products::schema::{categories, units};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Temporary database that is migrated on creation and removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Inserts category tags in the given order, so ids start at 1.
    pub fn insert_categories(&self, tags: &[&str]) -> Result<usize, DieselError> {
        let rows: Vec<_> = tags.iter().map(|tag| categories::tag.eq(*tag)).collect();
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(categories::table)
            .values(rows)
            .execute(&mut conn)
    }

    /// Inserts unit tags in the given order, so ids start at 1.
    pub fn insert_units(&self, tags: &[&str]) -> Result<usize, DieselError> {
        let rows: Vec<_> = tags.iter().map(|tag| units::tag.eq(*tag)).collect();
        let mut conn = self.pool.get().expect("get connection");
        diesel::insert_into(units::table)
            .values(rows)
            .execute(&mut conn)
    }
}
