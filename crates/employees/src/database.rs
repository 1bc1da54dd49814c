use sqlx::postgres::{PgConnectOptions, Postgres};
use sqlx::{Column, Connection, Executor, PgConnection, QueryBuilder, Statement};
use tracing::{debug, error, info};

use crate::config::DbConfig;
use crate::errors::AppError;
use crate::models::{Employee, NewEmployee, TableName};
use crate::table::ResultTable;

/// One scoped PostgreSQL connection.
///
/// Dropping the value releases the socket on every path, including errors.
/// [`Database::close`] additionally ends the session gracefully.
pub struct Database {
    conn: PgConnection,
}

impl Database {
    pub async fn connect(config: &DbConfig) -> Result<Self, AppError> {
        let db = Self::connect_with(&config.connect_options()).await?;
        info!("Connected to database {}", config.dbname);
        Ok(db)
    }

    /// Connects with prebuilt options, e.g. parsed from a `DATABASE_URL`.
    pub async fn connect_with(options: &PgConnectOptions) -> Result<Self, AppError> {
        match PgConnection::connect_with(options).await {
            Ok(conn) => Ok(Self { conn }),
            Err(source) => {
                let host = options.get_host().to_string();
                let port = options.get_port();
                error!("Connection to server at {host}:{port} failed");
                Err(AppError::Connect { host, port, source })
            }
        }
    }

    pub async fn close(self) -> Result<(), AppError> {
        self.conn.close().await?;
        debug!("Database connection closed");
        Ok(())
    }

    /// Creates the employee table if it does not exist yet.
    ///
    /// Runs in a transaction; on error nothing is committed.
    pub async fn create_table(&mut self, table: &TableName) -> Result<(), AppError> {
        match self.try_create_table(table).await {
            Ok(()) => {
                debug!("Table {table} is ready");
                Ok(())
            }
            Err(e) => {
                if e.is_syntax_error() {
                    error!("Error creating table {table}: {e}");
                } else {
                    error!("Database error: {e}");
                }
                Err(e)
            }
        }
    }

    async fn try_create_table(&mut self, table: &TableName) -> Result<(), AppError> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id SERIAL PRIMARY KEY,
                name VARCHAR(50) NOT NULL,
                age INT CHECK (age >= 0 AND age <= 100) NOT NULL,
                department VARCHAR(50) NOT NULL
            )
            "#
        );

        let mut tx = self.conn.begin().await?;
        sqlx::query(&sql).execute(&mut *tx).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Inserts all rows with one multi-row statement and returns the assigned ids.
    ///
    /// Runs in a transaction; on error no row is kept.
    pub async fn insert_employees(
        &mut self,
        table: &TableName,
        employees: &[NewEmployee],
    ) -> Result<Vec<i32>, AppError> {
        if employees.is_empty() {
            return Ok(Vec::new());
        }

        let ids = self
            .try_insert_employees(table, employees)
            .await
            .inspect_err(|e| error!("Data inserting error: {e}"))?;

        debug!("Inserted {} rows into {table}", ids.len());
        Ok(ids)
    }

    async fn try_insert_employees(
        &mut self,
        table: &TableName,
        employees: &[NewEmployee],
    ) -> Result<Vec<i32>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO {table} (name, age, department) "));
        builder.push_values(employees, |mut row, employee| {
            row.push_bind(employee.name.as_str())
                .push_bind(employee.age)
                .push_bind(employee.department.as_str());
        });
        builder.push(" RETURNING id");

        let mut tx = self.conn.begin().await?;
        let ids: Vec<i32> = builder.build_query_scalar().fetch_all(&mut *tx).await?;
        tx.commit().await?;

        Ok(ids)
    }

    /// Reads every row of `table` in whatever order the server returns them.
    ///
    /// Column names come from the statement metadata, so an empty table still
    /// reports its columns.
    pub async fn read_table(&mut self, table: &TableName) -> Result<ResultTable, AppError> {
        let rows = self
            .try_read_table(table)
            .await
            .inspect_err(|e| error!("Error reading data from table {table}: {e}"))?;

        debug!("Read {} rows from {table}", rows.len());
        Ok(rows)
    }

    async fn try_read_table(&mut self, table: &TableName) -> Result<ResultTable, AppError> {
        let sql = format!("SELECT * FROM {table}");

        let statement = (&mut self.conn).prepare(sql.as_str()).await?;
        let columns: Vec<String> = statement
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let rows = statement.query().fetch_all(&mut self.conn).await?;

        ResultTable::from_pg_rows(columns, &rows)
    }

    /// Typed read of the whole table, ordered by id.
    pub async fn fetch_employees(&mut self, table: &TableName) -> Result<Vec<Employee>, AppError> {
        let sql = format!("SELECT id, name, age, department FROM {table} ORDER BY id");

        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&mut self.conn)
            .await
            .inspect_err(|e| error!("Error reading data from table {table}: {e}"))?;

        Ok(employees)
    }

    pub async fn drop_table(&mut self, table: &TableName) -> Result<(), AppError> {
        let sql = format!("DROP TABLE IF EXISTS {table}");

        sqlx::query(&sql)
            .execute(&mut self.conn)
            .await
            .inspect_err(|e| error!("Error dropping table {table}: {e}"))?;

        Ok(())
    }
}
