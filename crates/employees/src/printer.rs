use std::io::{self, Write};

use tracing::error;

use crate::errors::AppError;
use crate::table::ResultTable;

const EMPLOYEE_COLUMNS: [&str; 4] = ["id", "name", "age", "department"];

/// Writes one line per row:
/// `ID: {id}, Name: {name}, Age: {age}, Department: {department}`.
///
/// Returns the number of lines written. Rows keep the table's order.
pub fn write_employees<W: Write>(table: &ResultTable, out: &mut W) -> Result<usize, AppError> {
    let mut indices = [0usize; 4];
    for (slot, column) in indices.iter_mut().zip(EMPLOYEE_COLUMNS) {
        *slot = table
            .column_index(column)
            .ok_or_else(|| AppError::MissingColumn(column.to_string()))?;
    }
    let [id, name, age, department] = indices;

    for row in table.rows() {
        writeln!(
            out,
            "ID: {}, Name: {}, Age: {}, Department: {}",
            row[id], row[name], row[age], row[department]
        )?;
    }

    Ok(table.len())
}

/// Prints the table to stdout, logging any failure before returning it.
pub fn print_employees(table: &ResultTable) -> Result<usize, AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write_employees(table, &mut out).inspect_err(|e| match e {
        AppError::MissingColumn(column) => {
            error!("Error printing table: missing column {column}")
        }
        other => error!("Error: {other}"),
    })
}
