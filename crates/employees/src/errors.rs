use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection to server at {host}:{port} failed: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid table name: {0:?}")]
    InvalidTableName(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Missing column {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns true for a SQL syntax error reported by the server (SQLSTATE 42601).
    pub fn is_syntax_error(&self) -> bool {
        match self {
            AppError::Database(sqlx::Error::Database(db_err)) => {
                db_err.code().as_deref() == Some("42601")
            }
            _ => false,
        }
    }
}
