use dotenvy::dotenv;
use inventory_app::{
    cli::{self, Console, Menu, Session},
    config::{self, database},
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing; stderr keeps log lines off the menu screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file, non-fatal
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;
    info!("Configuration loaded: {app_config:?}");

    // 4. Open the store, creating it if needed
    let db = database::initialize(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Import, welcome and menu loop
    let menu = Menu::standard();
    let mut session = Session::new(&db, Console::stdio(app_config.clear_screen), &app_config);
    let outcome = cli::run(&mut session, &menu, &app_config)
        .await
        .inspect_err(|e| error!("Inventory session failed: {e}"));

    // 6. Release the connection on every path
    drop(session);
    if let Err(e) = db.close().await {
        warn!("Failed to close database cleanly: {e}");
    }

    outcome
}
