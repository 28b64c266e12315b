//! The Router - single entry point for SQL statements.
//!
//! The Router classifies SQL text into commands and dispatches each one to
//! the caller's [`TableEnvironment`]. It holds no per-call state: catalog
//! state, configuration values and the dialect all live in the environment.

use std::fmt;
use std::sync::Arc;

use tablegate_core::{Command, CommandKind};
use tablegate_engine::TableEnvironment;

use crate::handlers;
use crate::{
    Error, MutationLock, OptionRegistry, OutputSink, Params, PatternClassifier, Result,
    RouterConfig, StatementClassifier,
};

/// The statement router.
///
/// # Thread Safety
///
/// Router is `Send + Sync` and can be shared across threads through an
/// `Arc`. DDL-class commands are serialized by the router's
/// [`MutationLock`]; all other commands run concurrently.
///
/// # Example
///
/// ```
/// use tablegate_executor::{CaptureSink, MemoryEnvironment, Params, Router};
///
/// let router = Router::new();
/// let env = MemoryEnvironment::new();
/// let sink = CaptureSink::new();
///
/// let params = Params::new().with("sql", "CREATE TABLE t (id INT); SHOW TABLES");
/// router.execute(None, &params, &env, &sink).unwrap();
///
/// assert_eq!(sink.lines(), vec!["tables: [t]"]);
/// ```
pub struct Router {
    config: RouterConfig,
    registry: Arc<OptionRegistry>,
    classifier: Arc<dyn StatementClassifier>,
    lock: MutationLock,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("options", &self.registry.len())
            .field("lock", &self.lock)
            .finish_non_exhaustive()
    }
}

impl Router {
    /// Router with the default configuration, the global option registry and
    /// the pattern classifier.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Router with the given configuration.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            registry: OptionRegistry::global(),
            classifier: Arc::new(PatternClassifier::new()),
            lock: MutationLock::new(),
        }
    }

    /// Replace the option registry `SET` validates against.
    pub fn with_registry(mut self, registry: Arc<OptionRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Replace the statement classifier.
    pub fn with_classifier(mut self, classifier: impl StatementClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Option registry in use.
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Lock serializing DDL-class commands.
    pub fn mutation_lock(&self) -> &MutationLock {
        &self.lock
    }

    /// Run the SQL text found in `params`.
    ///
    /// `sql_or_key` names the parameter holding the SQL text; `None` or an
    /// empty string falls back to the configured `sql_param_key`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSql`] when the parameter is absent or blank, otherwise
    /// the first error raised by [`Router::execute_sql`].
    pub fn execute(
        &self,
        sql_or_key: Option<&str>,
        params: &Params,
        env: &dyn TableEnvironment,
        sink: &dyn OutputSink,
    ) -> Result<()> {
        let key = match sql_or_key {
            Some(key) if !key.is_empty() => key,
            _ => self.config.sql_param_key.as_str(),
        };
        let sql = params
            .get(key)
            .filter(|sql| !sql.trim().is_empty())
            .ok_or_else(|| Error::MissingSql {
                key: key.to_string(),
            })?;
        self.execute_sql(sql, env, sink)
    }

    /// Classify `sql` and run every command in order.
    ///
    /// The first failing command aborts the call; commands before it stay
    /// applied.
    pub fn execute_sql(
        &self,
        sql: &str,
        env: &dyn TableEnvironment,
        sink: &dyn OutputSink,
    ) -> Result<()> {
        if sql.trim().is_empty() {
            return Err(Error::InvalidInput {
                reason: "SQL text is empty".to_string(),
            });
        }
        let commands = self.classifier.classify(sql)?;
        for cmd in &commands {
            self.dispatch(cmd, sql, env, sink)?;
        }
        Ok(())
    }

    /// Run one pre-built command.
    pub fn execute_command(
        &self,
        cmd: &Command,
        env: &dyn TableEnvironment,
        sink: &dyn OutputSink,
    ) -> Result<()> {
        self.dispatch(cmd, "", env, sink)
    }

    fn dispatch(
        &self,
        cmd: &Command,
        raw_sql: &str,
        env: &dyn TableEnvironment,
        sink: &dyn OutputSink,
    ) -> Result<()> {
        let kind = cmd.kind();
        let present = cmd.operands().len();
        if present < kind.min_operands() {
            return Err(Error::MissingOperand {
                command: kind.as_str().to_string(),
                index: present,
            });
        }

        if kind.is_mutating() {
            return handlers::ddl::execute(env, &self.lock, cmd);
        }

        match kind {
            // Catalog navigation and listing
            CommandKind::UseCatalog => handlers::catalog::use_catalog(env, cmd),
            CommandKind::Use => handlers::catalog::use_database(env, cmd),
            CommandKind::ShowCatalogs => handlers::catalog::show_catalogs(env, sink),
            CommandKind::ShowCurrentCatalog => handlers::catalog::show_current_catalog(env, sink),
            CommandKind::ShowDatabases => handlers::catalog::show_databases(env, sink),
            CommandKind::ShowCurrentDatabase => {
                handlers::catalog::show_current_database(env, sink)
            }
            CommandKind::ShowTables => {
                handlers::catalog::show_tables(env, &self.config.unnamed_table_prefix, sink)
            }
            CommandKind::ShowFunctions => handlers::catalog::show_functions(env, sink),
            CommandKind::ShowModules => handlers::catalog::show_modules(env, sink),

            // Schema and plan inspection
            CommandKind::Describe | CommandKind::Desc => {
                handlers::describe::describe(env, cmd, sink)
            }
            CommandKind::Explain => handlers::describe::explain(env, cmd, raw_sql, sink),

            // Configuration
            CommandKind::Set => handlers::config::set(env, &self.registry, cmd, sink),
            CommandKind::Reset => handlers::config::reset(env, cmd),

            // Rejected
            CommandKind::Select => Err(Error::UnsupportedCommand {
                command: kind.as_str().to_string(),
                reason: "queries are not routed; submit them to the query engine".to_string(),
            }),
            // Unknown; mutating kinds never reach this match
            _ => Err(Error::UnrecognizedStatement {
                statement: cmd
                    .operand(0)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(cmd.sql())
                    .to_string(),
            }),
        }
    }
}
