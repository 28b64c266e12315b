//! Shared fixtures for router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use tablegate_core::{EngineResult, SqlDialect, StatementResult, TableSchema};
use tablegate_engine::{ConfigStore, MemoryEnvironment, TableEnvironment};

use crate::{CaptureSink, Router};

/// Router, in-memory environment and capturing sink.
pub fn setup() -> (Router, MemoryEnvironment, CaptureSink) {
    (Router::new(), MemoryEnvironment::new(), CaptureSink::new())
}

/// Environment whose `execute_sql` is slow and records how many calls
/// overlapped.
#[derive(Debug, Default)]
pub struct SlowEnvironment {
    pub inner: MemoryEnvironment,
    pub delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl SlowEnvironment {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Highest number of `execute_sql` calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TableEnvironment for SlowEnvironment {
    fn use_catalog(&self, catalog: &str) -> EngineResult<()> {
        self.inner.use_catalog(catalog)
    }

    fn use_database(&self, database: &str) -> EngineResult<()> {
        self.inner.use_database(database)
    }

    fn list_catalogs(&self) -> EngineResult<Vec<String>> {
        self.inner.list_catalogs()
    }

    fn current_catalog(&self) -> EngineResult<String> {
        self.inner.current_catalog()
    }

    fn list_databases(&self) -> EngineResult<Vec<String>> {
        self.inner.list_databases()
    }

    fn current_database(&self) -> EngineResult<String> {
        self.inner.current_database()
    }

    fn list_tables(&self) -> EngineResult<Vec<String>> {
        self.inner.list_tables()
    }

    fn list_user_defined_functions(&self) -> EngineResult<Vec<String>> {
        self.inner.list_user_defined_functions()
    }

    fn list_modules(&self) -> EngineResult<Vec<String>> {
        self.inner.list_modules()
    }

    fn execute_sql(&self, statement: &str) -> EngineResult<StatementResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        thread::sleep(self.delay);
        let result = self.inner.execute_sql(statement);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn scan(&self, table: &str) -> EngineResult<TableSchema> {
        self.inner.scan(table)
    }

    fn config(&self) -> &ConfigStore {
        self.inner.config()
    }

    fn dialect(&self) -> SqlDialect {
        self.inner.dialect()
    }

    fn set_dialect(&self, dialect: SqlDialect) {
        self.inner.set_dialect(dialect)
    }
}

/// Environment whose `execute_sql` succeeds with an empty result.
#[derive(Debug, Default)]
pub struct EmptyResultEnvironment {
    pub inner: MemoryEnvironment,
}

impl TableEnvironment for EmptyResultEnvironment {
    fn use_catalog(&self, catalog: &str) -> EngineResult<()> {
        self.inner.use_catalog(catalog)
    }

    fn use_database(&self, database: &str) -> EngineResult<()> {
        self.inner.use_database(database)
    }

    fn list_catalogs(&self) -> EngineResult<Vec<String>> {
        self.inner.list_catalogs()
    }

    fn current_catalog(&self) -> EngineResult<String> {
        self.inner.current_catalog()
    }

    fn list_databases(&self) -> EngineResult<Vec<String>> {
        self.inner.list_databases()
    }

    fn current_database(&self) -> EngineResult<String> {
        self.inner.current_database()
    }

    fn list_tables(&self) -> EngineResult<Vec<String>> {
        self.inner.list_tables()
    }

    fn list_user_defined_functions(&self) -> EngineResult<Vec<String>> {
        self.inner.list_user_defined_functions()
    }

    fn list_modules(&self) -> EngineResult<Vec<String>> {
        self.inner.list_modules()
    }

    fn execute_sql(&self, _statement: &str) -> EngineResult<StatementResult> {
        Ok(StatementResult::default())
    }

    fn scan(&self, table: &str) -> EngineResult<TableSchema> {
        self.inner.scan(table)
    }

    fn config(&self) -> &ConfigStore {
        self.inner.config()
    }

    fn dialect(&self) -> SqlDialect {
        self.inner.dialect()
    }

    fn set_dialect(&self, dialect: SqlDialect) {
        self.inner.set_dialect(dialect)
    }
}
