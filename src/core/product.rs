//! Product business logic - the Record Store and validated product drafts.
//!
//! The store offers create, lookup by id or name, ordered enumeration and a
//! full-row update. Inserts that collide with the unique name index come back
//! as [`Error::DuplicateProduct`], which [`save_product`] turns into an update
//! of the existing row. Nothing here deletes a product.

use crate::{
    core::money,
    entities::{Product, product},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{ActiveValue::Unchanged, QueryOrder, Select, Set, SqlErr, prelude::*};
use tracing::debug;

/// A product that passed validation but has not been stored yet.
///
/// Built field by field through [`parse_name`], [`parse_quantity`] and
/// [`money::parse_dollars`]; there is no way to construct one with an empty name
/// or a negative quantity or price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDraft {
    name: String,
    quantity: i64,
    price: i64,
    date_updated: NaiveDate,
}

impl ProductDraft {
    /// Assembles a draft from already-validated parts.
    ///
    /// # Errors
    /// Rejects an empty name or a negative quantity or price.
    pub fn new(name: &str, quantity: i64, price: i64, date_updated: NaiveDate) -> Result<Self> {
        let name = parse_name(name)?;
        if quantity < 0 {
            return Err(Error::InvalidQuantity {
                input: quantity.to_string(),
            });
        }
        if price < 0 {
            return Err(Error::InvalidPrice {
                input: money::format_cents(price),
            });
        }
        Ok(Self {
            name,
            quantity,
            price,
            date_updated,
        })
    }

    /// Product name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units in stock
    #[must_use]
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price in cents
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Last-updated date
    #[must_use]
    pub const fn date_updated(&self) -> NaiveDate {
        self.date_updated
    }
}

/// Validates a product name: trimmed, non-empty.
///
/// # Errors
/// Returns [`Error::EmptyName`] for empty or whitespace-only input.
pub fn parse_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(name.to_string())
}

/// Validates a stock count: a non-negative integer.
///
/// # Errors
/// Returns [`Error::InvalidQuantity`] for negative or non-integer input.
pub fn parse_quantity(input: &str) -> Result<i64> {
    match input.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 0 => Ok(quantity),
        _ => Err(Error::InvalidQuantity {
            input: input.to_string(),
        }),
    }
}

/// Whether [`save_product`] inserted a new row or overwrote an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new row was inserted
    Created(product::Model),
    /// A row with the same name was updated
    Updated(product::Model),
}

impl SaveOutcome {
    /// The stored row, however it got there.
    #[must_use]
    pub const fn product(&self) -> &product::Model {
        match self {
            Self::Created(model) | Self::Updated(model) => model,
        }
    }
}

/// Inserts a new product row and returns it with its assigned id.
///
/// # Errors
/// Returns [`Error::DuplicateProduct`] if the name is already taken, or a
/// database error for any other failure.
pub async fn create_product(
    db: &DatabaseConnection,
    draft: &ProductDraft,
) -> Result<product::Model> {
    let product = product::ActiveModel {
        name: Set(draft.name.clone()),
        quantity: Set(draft.quantity),
        price: Set(draft.price),
        date_updated: Set(draft.date_updated),
        ..Default::default()
    };

    product.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Error::DuplicateProduct {
            name: draft.name.clone(),
        },
        _ => e.into(),
    })
}

/// Finds a product by exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Query over every product in ascending id order.
///
/// The query is a plain value, so it can be run again from the start; callers
/// that want one row at a time wrap it in a paginator.
#[must_use]
pub fn products_ordered_by_id() -> Select<Product> {
    Product::find().order_by_asc(product::Column::Id)
}

/// Loads every product in ascending id order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    products_ordered_by_id().all(db).await.map_err(Into::into)
}

/// Writes every field of `model` except the id back to its row.
///
/// # Errors
/// Returns an error if the row no longer exists or the update fails.
pub async fn update_product(
    db: &DatabaseConnection,
    model: &product::Model,
) -> Result<product::Model> {
    let product = product::ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name.clone()),
        quantity: Set(model.quantity),
        price: Set(model.price),
        date_updated: Set(model.date_updated),
    };
    product.update(db).await.map_err(Into::into)
}

/// Stores a draft, creating a row for a new name or overwriting quantity,
/// price and date of the row that already has this name.
///
/// # Errors
/// Returns an error if either the insert or the fallback update fails.
pub async fn save_product(db: &DatabaseConnection, draft: &ProductDraft) -> Result<SaveOutcome> {
    match create_product(db, draft).await {
        Ok(created) => Ok(SaveOutcome::Created(created)),
        Err(Error::DuplicateProduct { name }) => {
            debug!("Product '{name}' exists, updating in place");
            let mut existing = get_product_by_name(db, &name)
                .await?
                .ok_or(Error::ProductNotFound { name })?;

            existing.quantity = draft.quantity;
            existing.price = draft.price;
            existing.date_updated = draft.date_updated;

            update_product(db, &existing).await.map(SaveOutcome::Updated)
        }
        Err(e) => Err(e),
    }
}
