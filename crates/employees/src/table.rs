//! In-memory result table.
//!
//! A [`ResultTable`] keeps the column names reported by the database next to
//! the rows, so callers can address cells by column name without knowing the
//! schema up front.

use std::fmt;

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::errors::AppError;

/// A single dynamically typed cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A column type the reader does not decode; holds the type name.
    Unsupported(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Decodes column `index` of a row using the column's type name.
    pub fn decode(row: &PgRow, index: usize) -> Result<Self, AppError> {
        if row.try_get_raw(index)?.is_null() {
            return Ok(Value::Null);
        }

        let value = match row.column(index).type_info().name() {
            "BOOL" => Value::Bool(row.try_get::<bool, _>(index)?),
            "INT2" => Value::Int(row.try_get::<i16, _>(index)?.into()),
            "INT4" => Value::Int(row.try_get::<i32, _>(index)?.into()),
            "INT8" => Value::Int(row.try_get::<i64, _>(index)?),
            "FLOAT4" => Value::Float(row.try_get::<f32, _>(index)?.into()),
            "FLOAT8" => Value::Float(row.try_get::<f64, _>(index)?),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => Value::Text(row.try_get::<String, _>(index)?),
            other => Value::Unsupported(other.to_string()),
        };

        Ok(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Unsupported(type_name) => write!(f, "<{type_name}>"),
        }
    }
}

/// Rows of a query result together with their column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Builds a table from already decoded rows. Every row must have one
    /// value per column.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, AppError> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(AppError::RowWidth {
                row,
                expected: columns.len(),
                found: values.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Decodes fetched rows into a table with the given column names.
    pub fn from_pg_rows(columns: Vec<String>, rows: &[PgRow]) -> Result<Self, AppError> {
        let mut table = Self::new(columns);
        for row in rows {
            let values = (0..row.len())
                .map(|i| Value::decode(row, i))
                .collect::<Result<Vec<_>, _>>()?;
            table.rows.push(values);
        }
        Ok(table)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates over the values of one column, or `None` if the column does not exist.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}
