//! Test data generation for the employee table.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut db = Database::connect(&config.db).await?;
//! let employee_gen = EmployeeGenerator::new();
//! let mut rng = rand::thread_rng();
//!
//! let ids = Seeder::new(&mut db, config.table.clone())
//!     .seed_employees(employee_gen.stream(10, &mut rng))
//!     .await?;
//! ```

pub mod db;
pub mod generators;

// Re-export core types from employees crate
pub use employees::{Database, NewEmployee, TableName};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{EmployeeGenConfig, EmployeeGenerator, GeneratedEmployee};
    pub use crate::{Database, NewEmployee, TableName};
}
