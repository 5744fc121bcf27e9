//! Terminal interface - console I/O, the action menu and its handlers.

/// Action handlers (add, backup, show, view)
pub mod commands;
/// Line-oriented prompting over any reader/writer pair
pub mod console;
/// Action registry and the interactive loop
pub mod menu;

pub use console::Console;
pub use menu::{Action, Menu, MenuEntry, MenuSelection};

use crate::{config::AppConfig, core::csv_io, errors::Result};
use sea_orm::DatabaseConnection;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

/// Banner printed once after startup.
pub const WELCOME_MESSAGE: &str = "Welcome to the Inventory App!";

/// Everything a handler needs: the store, the console and where backups go.
pub struct Session<'db, R, W> {
    /// Store connection, owned by the caller
    pub db: &'db DatabaseConnection,
    /// Operator I/O
    pub console: Console<R, W>,
    /// Target of the backup action
    pub backup_csv: PathBuf,
}

impl<'db, R: BufRead, W: Write> Session<'db, R, W> {
    /// Creates a session over an open store.
    pub fn new(db: &'db DatabaseConnection, console: Console<R, W>, config: &AppConfig) -> Self {
        Self {
            db,
            console,
            backup_csv: config.backup_csv.clone(),
        }
    }
}

/// Prints the welcome banner with an underline of matching width.
pub fn welcome<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say(format!("{WELCOME_MESSAGE}\n"))?;
    console.say("=".repeat(WELCOME_MESSAGE.len()))
}

/// Runs the startup sequence (import, clear, welcome) and then the menu loop.
///
/// # Errors
/// Import failures abort before the menu starts; store errors inside a handler
/// end the session.
pub async fn run<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
    menu: &Menu,
    config: &AppConfig,
) -> Result<()> {
    let summary = csv_io::import_inventory(session.db, &config.inventory_csv).await?;
    info!(
        "Startup import: {} new, {} updated",
        summary.created, summary.updated
    );

    session.console.clear()?;
    welcome(&mut session.console)?;
    menu.run(session).await
}
