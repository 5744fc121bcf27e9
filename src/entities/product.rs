//! Product entity - the single inventory table.
//!
//! Each row is a named item with a stock count, a unit price held in cents and
//! the calendar date it was last touched. Names are unique; ids are assigned by
//! SQLite and never reused.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    /// Surrogate key assigned on insert
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name, unique across the table
    #[sea_orm(unique)]
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price in cents
    pub price: i64,
    /// Date of the last import or manual edit
    pub date_updated: Date,
}

/// Products stand alone
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
