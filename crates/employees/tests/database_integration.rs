//! Integration tests for the employee table operations.
//!
//! To run these tests, you need:
//! 1. A PostgreSQL database
//! 2. DATABASE_URL environment variable set
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p employees database`
//!
//! Note: Each test works on its own uniquely named table and drops it
//! afterwards, so they can safely run against a development database.

use std::env;
use std::str::FromStr;

use employees::printer::write_employees;
use employees::{AppError, Database, DbConfig, NewEmployee, TableName, Value};
use rand::Rng;
use sqlx::postgres::PgConnectOptions;

/// Get a database connection, skipping tests if DATABASE_URL is not set.
async fn get_test_db() -> Option<Database> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let options = match PgConnectOptions::from_str(&database_url) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Skipping test: Invalid DATABASE_URL: {e}");
            return None;
        }
    };

    match Database::connect_with(&options).await {
        Ok(db) => Some(db),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

fn unique_table(prefix: &str) -> TableName {
    let suffix: u32 = rand::thread_rng().r#gen();
    TableName::new(format!("{prefix}_{suffix:08x}")).expect("valid table name")
}

fn sample_employees() -> Vec<NewEmployee> {
    (0..10)
        .map(|i| NewEmployee::new(format!("Person{i}"), 18 + i * 8, "Quality Engineer"))
        .collect()
}

#[tokio::test]
async fn test_connect_to_unreachable_server_returns_error() {
    let config = DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        ..DbConfig::default()
    };

    let result = Database::connect(&config).await;

    match result {
        Err(AppError::Connect { host, port, .. }) => {
            assert_eq!(host, "127.0.0.1");
            assert_eq!(port, 1);
        }
        Err(other) => panic!("expected connect error, got {other}"),
        Ok(_) => panic!("connecting to port 1 should fail"),
    }
}

#[tokio::test]
async fn test_create_table_is_idempotent() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_idem");

    db.create_table(&table).await.expect("first create");
    db.create_table(&table).await.expect("second create");

    let contents = db.read_table(&table).await.expect("read");
    assert!(contents.is_empty());
    assert_eq!(contents.columns(), ["id", "name", "age", "department"]);

    db.drop_table(&table).await.expect("cleanup");
    db.close().await.expect("close");
}

#[tokio::test]
async fn test_create_table_reserved_word_is_syntax_error() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    // A valid identifier that PostgreSQL only accepts quoted.
    let table = TableName::new("user").expect("identifier shape is valid");

    match db.create_table(&table).await {
        Err(e) => assert!(e.is_syntax_error(), "expected syntax error, got {e}"),
        Ok(()) => panic!("creating a table named user should fail"),
    }

    db.close().await.expect("close");
}

#[tokio::test]
async fn test_insert_then_read_returns_inserted_rows() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_rw");
    db.create_table(&table).await.expect("create");

    let employees = sample_employees();
    let ids = db.insert_employees(&table, &employees).await.expect("insert");
    assert_eq!(ids.len(), 10);

    let contents = db.read_table(&table).await.expect("read");
    assert!(contents.len() >= 10);
    let read_ids: Vec<i64> = contents
        .column("id")
        .expect("id column")
        .filter_map(Value::as_i64)
        .collect();
    for id in &ids {
        assert!(read_ids.contains(&i64::from(*id)), "id {id} missing");
    }

    let mut out = Vec::new();
    assert_eq!(write_employees(&contents, &mut out).expect("print"), contents.len());
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Name: Person0, Age: 18, Department: Quality Engineer"));

    let typed = db.fetch_employees(&table).await.expect("typed read");
    let typed_rows: Vec<NewEmployee> = typed
        .into_iter()
        .map(|e| NewEmployee::new(e.name, e.age, e.department))
        .collect();
    assert_eq!(typed_rows, employees);

    db.drop_table(&table).await.expect("cleanup");
    db.close().await.expect("close");
}

#[tokio::test]
async fn test_insert_is_additive() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_add");
    db.create_table(&table).await.expect("create");

    db.insert_employees(&table, &sample_employees()).await.expect("insert");
    db.insert_employees(&table, &sample_employees()).await.expect("insert again");

    let contents = db.read_table(&table).await.expect("read");
    assert_eq!(contents.len(), 20);

    db.drop_table(&table).await.expect("cleanup");
    db.close().await.expect("close");
}

#[tokio::test]
async fn test_failed_insert_rolls_back_whole_batch() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_rb");
    db.create_table(&table).await.expect("create");

    let batch = vec![
        NewEmployee::new("Valid", 30, "Designer"),
        NewEmployee::new("TooOld", 150, "Designer"),
    ];
    let result = db.insert_employees(&table, &batch).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    let contents = db.read_table(&table).await.expect("read");
    assert!(contents.is_empty());

    db.drop_table(&table).await.expect("cleanup");
    db.close().await.expect("close");
}

#[tokio::test]
async fn test_read_missing_table_returns_error() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_missing");

    let result = db.read_table(&table).await;
    assert!(matches!(result, Err(AppError::Database(_))));

    db.close().await.expect("close");
}

#[tokio::test]
async fn test_empty_insert_is_noop() {
    let Some(mut db) = get_test_db().await else {
        return;
    };
    let table = unique_table("employees_empty");

    // No statement is sent, so the table does not even need to exist.
    let ids = db.insert_employees(&table, &[]).await.expect("empty insert");
    assert!(ids.is_empty());

    db.close().await.expect("close");
}
