//! Shared test utilities for the integration suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

pub use tablegate::{
    CaptureSink, Error, ErrorKind, MemoryEnvironment, Params, Router, RouterConfig,
    TableEnvironment, TableSchema, CONFIG_FILE_NAME,
};
use tempfile::TempDir;

// ============================================================================
// TestRouter - router, environment and sink bundled together
// ============================================================================

/// A router wired to a fresh in-memory environment and a capturing sink.
pub struct TestRouter {
    pub router: Arc<Router>,
    pub env: Arc<MemoryEnvironment>,
    pub sink: CaptureSink,
}

impl TestRouter {
    /// Default configuration.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Custom configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            router: Arc::new(Router::with_config(config)),
            env: Arc::new(MemoryEnvironment::new()),
            sink: CaptureSink::new(),
        }
    }

    /// Run SQL text and panic with the statement on failure.
    pub fn run(&self, sql: &str) {
        if let Err(e) = self.router.execute_sql(sql, self.env.as_ref(), &self.sink) {
            panic!("{:?} failed: {}", sql, e);
        }
    }

    /// Run SQL text, returning the error.
    pub fn try_run(&self, sql: &str) -> Result<(), Error> {
        self.router.execute_sql(sql, self.env.as_ref(), &self.sink)
    }

    /// Drain captured output.
    pub fn output(&self) -> Vec<String> {
        self.sink.take()
    }
}

impl Default for TestRouter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Config files
// ============================================================================

/// Temporary directory holding a `tablegate.toml` with the given content.
pub fn config_dir(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, content).expect("write config file");
    (dir, path)
}
