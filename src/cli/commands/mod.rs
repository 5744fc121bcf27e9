//! Action handlers invoked from the menu.

/// Backup export
pub mod backup;
/// Add, show and view products
pub mod product;

pub use backup::backup_data;
pub use product::{add_product, show_product, view_products};
