//! Importer/Exporter between delimited files and the product store.
//!
//! Import reads `product_name,product_price,product_quantity,date_updated` rows
//! (any column order, matched by header) with prices like `$12.99` and dates as
//! `MM/DD/YYYY`, then saves each row in file order. There is no surrounding
//! transaction: a bad row aborts the import but earlier rows stay committed.
//!
//! Export writes every product in id order with the price as raw cents and the
//! date as `YYYY-MM-DD`.

use crate::{
    core::{
        money,
        product::{self, ProductDraft, SaveOutcome},
    },
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Date layout used by the import file.
pub const IMPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of the import file, as text.
#[derive(Debug, Deserialize)]
struct InventoryRow {
    product_name: String,
    product_price: String,
    product_quantity: String,
    date_updated: String,
}

impl InventoryRow {
    fn into_draft(self) -> Result<ProductDraft> {
        let quantity = product::parse_quantity(&self.product_quantity)?;
        let price = money::parse_dollars(&self.product_price)?;
        let date = parse_import_date(&self.date_updated)?;
        ProductDraft::new(&self.product_name, quantity, price, date)
    }
}

/// One row of the backup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Product name
    pub product_name: String,
    /// Units in stock
    pub product_quantity: i64,
    /// Unit price in cents
    pub product_price: i64,
    /// Last-updated date
    pub date_updated: NaiveDate,
}

/// Counts from a finished import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows that inserted a new product
    pub created: usize,
    /// Rows that overwrote an existing product
    pub updated: usize,
}

/// Result of a backup export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    /// Where the backup was written
    pub path: PathBuf,
    /// Number of product rows written
    pub records: usize,
}

impl BackupReport {
    /// True when the backup file is present after the write.
    #[must_use]
    pub fn file_exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Parses an import-file date such as `01/31/2024`.
///
/// # Errors
/// Returns [`Error::InvalidDate`] when the text does not match `MM/DD/YYYY`
/// or names an impossible day.
pub fn parse_import_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), IMPORT_DATE_FORMAT).map_err(|_| Error::InvalidDate {
        input: input.to_string(),
    })
}

/// Imports the inventory file at `path` into the store.
///
/// # Errors
/// Fails on the first unreadable file, malformed row, bad price, quantity or
/// date, or database error. Rows before the failing one remain saved.
pub async fn import_inventory<P: AsRef<Path>>(
    db: &DatabaseConnection,
    path: P,
) -> Result<ImportSummary> {
    let path = path.as_ref();
    info!("Importing inventory from {}", path.display());

    let mut reader = csv::Reader::from_path(path)?;
    let mut summary = ImportSummary::default();

    for result in reader.deserialize() {
        let row: InventoryRow = result?;
        let draft = row.into_draft()?;
        match product::save_product(db, &draft).await? {
            SaveOutcome::Created(model) => {
                debug!("Imported new product '{}' as id {}", model.name, model.id);
                summary.created += 1;
            }
            SaveOutcome::Updated(model) => {
                debug!("Import updated product '{}' (id {})", model.name, model.id);
                summary.updated += 1;
            }
        }
    }

    info!(
        "Import finished: {} created, {} updated",
        summary.created, summary.updated
    );
    Ok(summary)
}

/// Writes every product to a backup file at `path`, replacing any old copy.
///
/// # Errors
/// Returns an error if the store cannot be read or the file cannot be written.
pub async fn export_inventory<P: AsRef<Path>>(
    db: &DatabaseConnection,
    path: P,
) -> Result<BackupReport> {
    let path = path.as_ref();
    let products = product::list_products(db).await?;

    let mut writer = csv::Writer::from_path(path)?;
    for model in &products {
        writer.serialize(BackupRecord {
            product_name: model.name.clone(),
            product_quantity: model.quantity,
            product_price: model.price,
            date_updated: model.date_updated,
        })?;
    }
    if products.is_empty() {
        // serialize() writes the header with the first row
        writer.write_record([
            "product_name",
            "product_quantity",
            "product_price",
            "date_updated",
        ])?;
    }
    writer.flush()?;

    info!(
        "Wrote {} products to backup {}",
        products.len(),
        path.display()
    );
    Ok(BackupReport {
        path: path.to_path_buf(),
        records: products.len(),
    })
}

/// Reads a backup file written by [`export_inventory`].
///
/// # Errors
/// Returns an error if the file is missing or a row does not parse.
pub fn read_backup<P: AsRef<Path>>(path: P) -> Result<Vec<BackupRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    reader
        .deserialize()
        .map(|row| row.map_err(Error::from))
        .collect()
}
