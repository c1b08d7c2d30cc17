//! Employee tracker CLI entry point

use employee_tracker::app;
use employee_tracker::config::Config;
use employee_tracker::store::Database;
use employee_tracker::ui::output;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // The `debug` positional argument raises the default filter
    let default_filter = if config.debug {
        "employee_tracker=debug"
    } else {
        "employee_tracker=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let db = Database::connect(&config).await?;
    tracing::debug!(
        "connected to {}:{}/{}",
        config.host,
        config.port,
        config.database
    );

    // Run the menu loop, then release the session on every exit path.
    let outcome = app::run(&db).await;
    db.close().await;
    output::info("Database Connection Closed");

    if let Err(e) = outcome {
        output::error(&format!("PROMPT ERROR: {e}"));
        return Err(e.into());
    }
    Ok(())
}
