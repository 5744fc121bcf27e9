//! Entity module - SeaORM entity definitions for the database.
//! The inventory has exactly one table, `product`.

pub mod product;

pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
