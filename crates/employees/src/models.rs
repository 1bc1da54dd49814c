use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

/// Column width of the `name` and `department` columns.
pub const TEXT_COLUMN_LEN: usize = 50;

/// Lowest and highest age accepted by the table's CHECK constraint.
pub const MIN_STORED_AGE: i32 = 0;
pub const MAX_STORED_AGE: i32 = 100;

/// Longest identifier PostgreSQL keeps without truncation (NAMEDATALEN - 1).
const MAX_IDENTIFIER_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub department: String,
}

/// An employee row before the database assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub department: String,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, age: i32, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
        }
    }
}

/// A table name that is safe to interpolate into SQL.
///
/// Identifiers cannot be bound as query parameters, so the name is restricted
/// to an unquoted identifier: an ASCII letter or underscore followed by ASCII
/// letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid_start && valid_rest && name.len() <= MAX_IDENTIFIER_LEN {
            Ok(Self(name))
        } else {
            Err(AppError::InvalidTableName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TableName {
    fn default() -> Self {
        Self("employees".to_string())
    }
}

impl FromStr for TableName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TableName> for String {
    fn from(name: TableName) -> Self {
        name.0
    }
}

impl<'de> Deserialize<'de> for TableName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        TableName::new(raw).map_err(serde::de::Error::custom)
    }
}
