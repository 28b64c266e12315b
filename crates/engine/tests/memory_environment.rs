//! MemoryEnvironment through the public TableEnvironment contract.

use std::sync::Arc;
use std::thread;

use tablegate_core::{EngineError, SqlDialect, TableSchema};
use tablegate_engine::{MemoryEnvironment, TableEnvironment, DEFAULT_CATALOG, DEFAULT_DATABASE};

fn as_dyn(env: &MemoryEnvironment) -> &dyn TableEnvironment {
    env
}

#[test]
fn usable_as_trait_object() {
    let env = MemoryEnvironment::new();
    let env = as_dyn(&env);
    env.execute_sql("CREATE TABLE t (id INT, name STRING)").unwrap();
    let schema = env.scan("t").unwrap();
    assert_eq!(schema.field_count(), 2);
    assert_eq!(schema.field_type(1), Some("STRING"));
}

#[test]
fn qualified_names_resolve_across_catalogs() {
    let env = MemoryEnvironment::new();
    env.execute_sql("CREATE CATALOG lake").unwrap();
    env.execute_sql("CREATE DATABASE lake.raw").unwrap();
    env.execute_sql("CREATE TABLE lake.raw.clicks (ts TIMESTAMP(3))")
        .unwrap();

    assert_eq!(env.current_catalog().unwrap(), DEFAULT_CATALOG);
    assert_eq!(
        env.scan("lake.raw.clicks").unwrap().field_name(0),
        Some("ts")
    );

    env.use_database("lake.raw").unwrap();
    assert_eq!(env.current_catalog().unwrap(), "lake");
    assert_eq!(env.list_tables().unwrap(), vec!["clicks"]);
}

#[test]
fn failed_statements_are_not_journaled() {
    let env = MemoryEnvironment::new();
    env.execute_sql("CREATE DATABASE a").unwrap();
    let err = env.execute_sql("CREATE DATABASE a").unwrap_err();
    assert!(matches!(err, EngineError::AlreadyExists { .. }));
    env.execute_sql("CREATE DATABASE IF NOT EXISTS a").unwrap();
    assert_eq!(
        env.executed_statements(),
        vec!["CREATE DATABASE a", "CREATE DATABASE IF NOT EXISTS a"]
    );
}

#[test]
fn unsupported_statement_is_rejected() {
    let env = MemoryEnvironment::new();
    let err = env.execute_sql("GRANT SELECT ON t TO alice").unwrap_err();
    assert!(matches!(err, EngineError::UnsupportedStatement { .. }));
}

#[test]
fn custom_defaults() {
    let env = MemoryEnvironment::with_defaults("hive_catalog", "warehouse");
    assert_eq!(env.list_catalogs().unwrap(), vec!["hive_catalog"]);
    assert_eq!(env.current_database().unwrap(), "warehouse");
    assert_ne!(env.current_database().unwrap(), DEFAULT_DATABASE);
}

#[test]
fn dialect_and_config_are_shared_state() {
    let env = Arc::new(MemoryEnvironment::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let env = Arc::clone(&env);
            thread::spawn(move || {
                env.config().set(format!("k{}", i), "v");
                env.set_dialect(SqlDialect::Hive);
                env.register_table(&format!("t{}", i), TableSchema::new().field("x", "INT"))
                    .unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(env.config().len(), 4);
    assert_eq!(env.dialect(), SqlDialect::Hive);
    assert_eq!(env.list_tables().unwrap().len(), 4);
}
