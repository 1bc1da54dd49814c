use employees::{AppConfig, Database, printer::print_employees};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the current contents of the employee table without modifying it.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let config = AppConfig::from_env()?;

    let mut db = match Database::connect(&config.db).await {
        Ok(db) => db,
        Err(_) => {
            info!("Exited");
            return Ok(());
        }
    };

    if let Ok(table) = db.read_table(&config.table).await {
        let _ = print_employees(&table);
    }

    db.close().await?;
    Ok(())
}
