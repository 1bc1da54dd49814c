//! Default seed script - creates the employee table, adds generated
//! employees and prints everything the table holds.
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! Connection settings come from `DB_NAME`, `DB_USER`, `DB_PASSWORD`,
//! `DB_HOST` and `DB_PORT`; see `employees::config`.

use employees::{AppConfig, Database, printer::print_employees};
use test_data::db::{SeedError, Seeder};
use test_data::generators::EmployeeGenerator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;

    let mut db = match Database::connect(&config.db).await {
        Ok(db) => db,
        Err(_) => {
            tracing::info!("Exited");
            return Ok(());
        }
    };

    // Failures are already logged where they happen; the connection is
    // closed either way.
    if let Err(e) = run(&mut db, &config).await {
        tracing::info!("Stopped early: {e}");
    }

    db.close().await?;
    Ok(())
}

async fn run(db: &mut Database, config: &AppConfig) -> Result<(), SeedError> {
    db.create_table(&config.table).await?;

    let employee_gen = EmployeeGenerator::new();
    let mut rng = rand::thread_rng();
    let ids = Seeder::new(db, config.table.clone())
        .seed_employees(employee_gen.stream(config.seed_count, &mut rng))
        .await?;
    tracing::debug!("Inserted ids: {ids:?}");

    let table = db.read_table(&config.table).await?;
    // A malformed table is logged by the printer and does not stop the run.
    let _ = print_employees(&table);

    Ok(())
}
