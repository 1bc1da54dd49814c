//! Database integration for seeding test data.
//!
//! The [`Seeder`] inserts generated employees in multi-row batches and
//! reports progress as it goes.

mod seeder;

pub use seeder::{DEFAULT_BATCH_SIZE, SeedError, Seeder};
