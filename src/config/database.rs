//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation through `SeaORM`. The
//! table is generated from the entity definition with `IF NOT EXISTS`, so
//! running [`create_tables`] on every start is safe and leaves existing rows
//! alone.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info};

/// Default on-disk store; `mode=rwc` lets `SQLite` create the file when absent.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";

/// Opens a connection to the store at `database_url`.
///
/// # Errors
/// Returns an error if the location cannot be opened or created.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database at {database_url}");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the `product` table if it is missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    Ok(())
}

/// Connects and makes sure the schema exists.
///
/// # Errors
/// Fails if the connection cannot be opened or the table cannot be created,
/// e.g. when the storage location is not writable.
pub async fn initialize(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    info!("Database ready at {database_url}");
    Ok(db)
}
