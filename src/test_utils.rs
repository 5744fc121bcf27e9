//! Shared test utilities for the inventory app.
//!
//! Helpers for setting up an in-memory store and creating products with
//! sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::product::{self, ProductDraft},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the product table in place.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Fixed date used by fixtures: 2024-01-31.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

/// Builds a draft dated [`test_date`].
pub fn draft(name: &str, quantity: i64, price: i64) -> ProductDraft {
    ProductDraft::new(name, quantity, price, test_date()).unwrap()
}

/// Creates a product with defaults.
///
/// # Defaults
/// * quantity: 10
/// * price: 199 cents
/// * `date_updated`: [`test_date`]
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(db, &draft(name, 10, 199)).await
}
