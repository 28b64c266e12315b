//! Multi-statement scripts.

use crate::common::*;

#[test]
fn catalog_database_table_lifecycle() {
    let t = TestRouter::new();
    t.run(
        "CREATE CATALOG lake;
         USE CATALOG lake;
         CREATE DATABASE IF NOT EXISTS sales;
         USE sales;
         CREATE TABLE orders (
           id BIGINT,
           customer STRING,
           amount DECIMAL(10, 2)
         ) WITH ('connector' = 'datagen');
         CREATE VIEW big_orders AS SELECT * FROM orders WHERE amount > 100;
         SHOW CURRENT CATALOG;
         SHOW CURRENT DATABASE;
         SHOW TABLES;",
    );

    assert_eq!(
        t.output(),
        vec![
            "current catalog: lake",
            "current database: sales",
            "tables: [big_orders, orders]",
        ]
    );

    t.run("DESCRIBE orders");
    assert_eq!(
        t.output(),
        vec!["Column\tType\nid\tBIGINT\ncustomer\tSTRING\namount\tDECIMAL(10, 2)"]
    );

    t.run("ALTER TABLE orders RENAME TO orders_v2; DROP VIEW big_orders; SHOW TABLES");
    assert_eq!(t.output(), vec!["tables: [orders_v2]"]);
}

#[test]
fn functions_lifecycle() {
    let t = TestRouter::new();
    t.run(
        "CREATE FUNCTION parse_ua AS 'com.example.ParseUserAgent';
         CREATE TEMPORARY FUNCTION mask AS 'com.example.Mask';
         SHOW FUNCTIONS",
    );
    assert_eq!(t.output(), vec!["functions: [mask, parse_ua]"]);

    t.run("ALTER FUNCTION parse_ua AS 'com.example.ParseUserAgentV2'");
    assert_eq!(
        t.env.function_class("parse_ua").as_deref(),
        Some("com.example.ParseUserAgentV2")
    );

    t.run("DROP FUNCTION mask; DROP FUNCTION IF EXISTS mask; SHOW FUNCTIONS");
    assert_eq!(t.output(), vec!["functions: [parse_ua]"]);
}

#[test]
fn inserts_reach_the_backend() {
    let t = TestRouter::new();
    t.run(
        "CREATE TABLE src (id INT);
         CREATE TABLE dst (id INT);
         INSERT INTO dst SELECT * FROM src;
         INSERT OVERWRITE dst SELECT * FROM src",
    );
    let journal = t.env.executed_statements();
    assert_eq!(journal.len(), 4);
    assert_eq!(journal[3], "INSERT OVERWRITE dst SELECT * FROM src");
    assert_eq!(t.router.mutation_lock().acquisitions(), 4);
}

#[test]
fn insert_into_missing_table_fails() {
    let t = TestRouter::new();
    let err = t.try_run("INSERT INTO ghost SELECT 1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Backend);
}

#[test]
fn duplicate_database_stops_script() {
    let t = TestRouter::new();
    let err = t
        .try_run("CREATE DATABASE d; CREATE DATABASE d; CREATE DATABASE never")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Backend);

    t.run("SHOW DATABASES");
    assert_eq!(t.output(), vec!["databases: [d, default_database]"]);
}

#[test]
fn select_is_rejected_after_earlier_effects() {
    let t = TestRouter::new();
    let err = t
        .try_run("SET pipeline.name = report; SELECT 1")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(t.env.config().get("pipeline.name").as_deref(), Some("report"));
}

#[test]
fn params_from_command_line() {
    let t = TestRouter::new();
    let params = Params::from_args([
        "--mode",
        "batch",
        "--sql",
        "SET table.sql-dialect = hive; SET table.sql-dialect",
    ])
    .unwrap();

    t.router
        .execute(None, &params, t.env.as_ref(), &t.sink)
        .unwrap();
    assert_eq!(t.output(), vec!["table.sql-dialect=hive"]);

    let err = t
        .router
        .execute(Some("mode"), &Params::from_args(["--mode"]).unwrap(), t.env.as_ref(), &t.sink)
        .unwrap_err();
    assert!(matches!(err, Error::MissingSql { .. }));
}

#[test]
fn unnamed_tables_stay_hidden() {
    let t = TestRouter::new();
    t.env
        .register_unnamed_table(TableSchema::new().field("v", "INT"))
        .unwrap();
    t.run("CREATE TABLE visible (v INT); SHOW TABLES");
    assert_eq!(t.output(), vec!["tables: [visible]"]);
    assert_eq!(t.env.list_tables().unwrap().len(), 2);
}
