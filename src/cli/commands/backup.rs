//! Backup action - writes the store to the configured backup CSV.

use crate::{cli::Session, core::csv_io, errors::Result};
use std::io::{BufRead, Write};
use tracing::{error, warn};

/// Exports every product and reports whether the backup file is in place.
///
/// A failed export is reported to the operator and logged; the session carries on.
///
/// # Errors
/// Only console write failures are returned.
pub async fn backup_data<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    session.console.clear()?;

    let written = match csv_io::export_inventory(session.db, &session.backup_csv).await {
        Ok(report) if report.file_exists() => Some(report),
        Ok(report) => {
            warn!("Backup reported success but {} is missing", report.path.display());
            None
        }
        Err(e) => {
            error!("Backup to {} failed: {e}", session.backup_csv.display());
            None
        }
    };

    session.console.clear()?;
    match written {
        Some(report) => session.console.say(format!(
            "Your Backup CSV has been updated! ({} products written to {})",
            report.records,
            report.path.display()
        )),
        None => session.console.say("Something went wrong, please try again"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        cli::Console,
        config::AppConfig,
        core::{csv_io, product},
        test_utils::*,
    };
    use std::io::Cursor;

    #[tokio::test]
    async fn test_backup_writes_file() -> Result<()> {
        let db = setup_test_db().await?;
        product::save_product(&db, &draft("Widget", 3, 450)).await?;

        let dir = tempfile::tempdir()?;
        let config = AppConfig {
            backup_csv: dir.path().join("inventory_backup.csv"),
            clear_screen: false,
            ..AppConfig::default()
        };
        let console = Console::new(Cursor::new(Vec::new()), Vec::new(), false);
        let mut session = Session::new(&db, console, &config);

        backup_data(&mut session).await?;

        let output = String::from_utf8(session.console.into_output()).unwrap();
        assert!(output.contains("Your Backup CSV has been updated! (1 products"));
        let rows = csv_io::read_backup(&config.backup_csv)?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_price, 450);
        Ok(())
    }

    #[tokio::test]
    async fn test_backup_failure_is_reported_not_raised() -> Result<()> {
        let db = setup_test_db().await?;
        let dir = tempfile::tempdir()?;

        // Parent directory does not exist
        let config = AppConfig {
            backup_csv: dir.path().join("missing_dir").join("backup.csv"),
            clear_screen: false,
            ..AppConfig::default()
        };
        let console = Console::new(Cursor::new(Vec::new()), Vec::new(), false);
        let mut session = Session::new(&db, console, &config);

        backup_data(&mut session).await?;

        let output = String::from_utf8(session.console.into_output()).unwrap();
        assert!(output.contains("Something went wrong, please try again"));
        Ok(())
    }
}
