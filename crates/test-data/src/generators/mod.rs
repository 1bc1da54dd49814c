//! Entity generators for test data.
//!
//! - [`EmployeeGenerator`]: Generate employees with a name, age and job title

pub mod employee;

pub use employee::{EmployeeGenConfig, EmployeeGenerator, GeneratedEmployee};
