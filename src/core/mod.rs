//! Core business logic - framework-agnostic product, money and CSV operations.

/// Import from and export to delimited files
pub mod csv_io;
/// Currency parsing and formatting
pub mod money;
/// Record Store operations and validated drafts
pub mod product;
