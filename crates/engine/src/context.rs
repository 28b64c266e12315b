//! The execution-context contract.

use tablegate_core::{EngineResult, SqlDialect, StatementResult, TableSchema};

use crate::ConfigStore;

/// A live table/catalog backend shared across router calls.
///
/// Every method takes `&self`: implementations use interior mutability so a
/// single environment can be shared behind an `Arc` by concurrent callers.
/// Listing methods return names in a stable order.
///
/// # Example
///
/// ```
/// use tablegate_engine::{MemoryEnvironment, TableEnvironment};
///
/// let env = MemoryEnvironment::new();
/// env.execute_sql("CREATE DATABASE db1").unwrap();
/// env.use_database("db1").unwrap();
/// assert_eq!(env.current_database().unwrap(), "db1");
/// ```
pub trait TableEnvironment: Send + Sync {
    /// Switch the current catalog; the current database becomes that
    /// catalog's default database.
    fn use_catalog(&self, catalog: &str) -> EngineResult<()>;

    /// Switch the current database. `catalog.database` also switches catalog.
    fn use_database(&self, database: &str) -> EngineResult<()>;

    /// All registered catalogs.
    fn list_catalogs(&self) -> EngineResult<Vec<String>>;

    /// Name of the current catalog.
    fn current_catalog(&self) -> EngineResult<String>;

    /// Databases of the current catalog.
    fn list_databases(&self) -> EngineResult<Vec<String>>;

    /// Name of the current database.
    fn current_database(&self) -> EngineResult<String>;

    /// Tables and views of the current database, including unnamed ones.
    fn list_tables(&self) -> EngineResult<Vec<String>>;

    /// User-defined functions visible to the session.
    fn list_user_defined_functions(&self) -> EngineResult<Vec<String>>;

    /// Loaded modules.
    fn list_modules(&self) -> EngineResult<Vec<String>>;

    /// Run one statement to completion.
    fn execute_sql(&self, statement: &str) -> EngineResult<StatementResult>;

    /// Resolve the schema of a table or view.
    fn scan(&self, table: &str) -> EngineResult<TableSchema>;

    /// The environment's configuration map.
    fn config(&self) -> &ConfigStore;

    /// Current SQL dialect.
    fn dialect(&self) -> SqlDialect;

    /// Switch the SQL dialect.
    fn set_dialect(&self, dialect: SqlDialect);
}
