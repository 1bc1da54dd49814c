//! PostgreSQL employee table: one scoped connection, idempotent schema
//! creation, multi-row inserts and a dynamically typed read-back.

pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod printer;
pub mod table;

pub use config::{AppConfig, DbConfig};
pub use database::Database;
pub use errors::AppError;
pub use models::{Employee, NewEmployee, TableName};
pub use table::{ResultTable, Value};
