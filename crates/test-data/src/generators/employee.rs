//! Employee generation.

use fake::{
    Fake,
    faker::{job::en::Title, name::en::FirstName},
};
use rand::Rng;

use employees::NewEmployee;
use employees::models::TEXT_COLUMN_LEN;

/// Generated employee data ready for database insertion.
pub type GeneratedEmployee = NewEmployee;

/// Configuration for employee generation.
#[derive(Debug, Clone)]
pub struct EmployeeGenConfig {
    /// Youngest generated age (inclusive).
    pub min_age: i32,
    /// Oldest generated age (inclusive).
    pub max_age: i32,
}

impl Default for EmployeeGenConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 100,
        }
    }
}

/// Generates employees with a fake first name, a uniform age and a job title
/// as department.
pub struct EmployeeGenerator {
    config: EmployeeGenConfig,
}

impl EmployeeGenerator {
    /// Creates a new employee generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: EmployeeGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: EmployeeGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single employee.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedEmployee {
        let name: String = FirstName().fake_with_rng(rng);
        let age = rng.gen_range(self.config.min_age..=self.config.max_age);
        let department: String = Title().fake_with_rng(rng);

        NewEmployee {
            name: clip(name),
            age,
            department: clip(department),
        }
    }

    /// Lazily yields exactly `how_many` employees. Each item draws from `rng`
    /// only when pulled.
    pub fn stream<'a, R: Rng>(
        &'a self,
        how_many: usize,
        rng: &'a mut R,
    ) -> impl Iterator<Item = GeneratedEmployee> + 'a {
        (0..how_many).map(move |_| self.generate(&mut *rng))
    }

    /// Generates multiple employees.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedEmployee> {
        self.stream(count, rng).collect()
    }
}

impl Default for EmployeeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cuts a value to the width of the text columns.
fn clip(mut value: String) -> String {
    if let Some((byte_index, _)) = value.char_indices().nth(TEXT_COLUMN_LEN) {
        value.truncate(byte_index);
    }
    value
}
