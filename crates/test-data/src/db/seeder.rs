//! Database seeding utilities.

use employees::models::{MAX_STORED_AGE, MIN_STORED_AGE};
use employees::{AppError, Database, TableName};
use thiserror::Error;
use tracing::info;

use crate::generators::GeneratedEmployee;

/// Rows per multi-row INSERT.
pub const DEFAULT_BATCH_SIZE: usize = 50;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] AppError),
    #[error("Age {age} of {name} is outside the stored range 0..=100")]
    AgeOutOfRange { name: String, age: i32 },
}

/// Database seeder for inserting generated employees into one table.
pub struct Seeder<'a> {
    db: &'a mut Database,
    table: TableName,
    batch_size: usize,
}

impl<'a> Seeder<'a> {
    /// Creates a new seeder writing to `table` through `db`.
    pub fn new(db: &'a mut Database, table: TableName) -> Self {
        Self {
            db,
            table,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Sets the batch size for bulk operations. Zero is treated as one.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Seeds employees, pulling from `employees` one batch at a time.
    ///
    /// Each batch is one INSERT in its own transaction. Returns the ids of
    /// every inserted row.
    pub async fn seed_employees<I>(&mut self, employees: I) -> Result<Vec<i32>, SeedError>
    where
        I: IntoIterator<Item = GeneratedEmployee>,
    {
        let mut employees = employees.into_iter();
        let mut ids = Vec::new();

        info!("Seeding employees into {}...", self.table);

        loop {
            let batch: Vec<GeneratedEmployee> =
                employees.by_ref().take(self.batch_size).collect();
            if batch.is_empty() {
                break;
            }
            validate_batch(&batch)?;

            let inserted = self.db.insert_employees(&self.table, &batch).await?;
            ids.extend(inserted);
            info!("  Seeded {} employees", ids.len());
        }

        info!("Seeded {} employees into {}", ids.len(), self.table);
        Ok(ids)
    }
}

/// Rejects rows the table's CHECK constraint would refuse.
fn validate_batch(batch: &[GeneratedEmployee]) -> Result<(), SeedError> {
    match batch
        .iter()
        .find(|e| !(MIN_STORED_AGE..=MAX_STORED_AGE).contains(&e.age))
    {
        Some(e) => Err(SeedError::AgeOutOfRange {
            name: e.name.clone(),
            age: e.age,
        }),
        None => Ok(()),
    }
}
