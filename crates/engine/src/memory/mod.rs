//! In-memory table environment.
//!
//! `MemoryEnvironment` keeps a catalog tree (catalogs → databases →
//! tables/views), user-defined functions, loaded modules, a configuration
//! store and the current dialect entirely in memory. It is the backend used
//! by the router's tests and by embedders that need a working router without
//! a real engine.
//!
//! | Statement | Effect |
//! |-----------|--------|
//! | `CREATE/DROP CATALOG` | add/remove a catalog (with its default database) |
//! | `CREATE/DROP/ALTER DATABASE` | add/remove/check a database |
//! | `CREATE/DROP/ALTER TABLE` | add/remove/rename a table, schema from the column list |
//! | `CREATE/DROP VIEW` | add/remove a view |
//! | `CREATE/DROP/ALTER FUNCTION` | register/unregister/replace a function class |
//! | `INSERT INTO/OVERWRITE` | check the target exists |
//! | `EXPLAIN` | single-row plan text |
//!
//! Successful statements are appended to a journal, see
//! [`MemoryEnvironment::executed_statements`].

mod statements;

use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tablegate_core::{EngineError, EngineResult, SqlDialect, StatementResult, TableSchema};
use tracing::debug;

use crate::{ConfigStore, TableEnvironment};
use statements::{split_path, Statement};

/// Catalog created at startup.
pub const DEFAULT_CATALOG: &str = "default_catalog";
/// Database created in every new catalog.
pub const DEFAULT_DATABASE: &str = "default_database";
/// Name prefix of tables registered without a name.
pub const UNNAMED_TABLE_PREFIX: &str = "UnnamedTable$";

// ============================================================================
// Catalog tree
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableKind {
    Table,
    View,
}

#[derive(Debug, Clone)]
struct TableEntry {
    kind: TableKind,
    schema: TableSchema,
}

#[derive(Debug, Default)]
struct DatabaseEntry {
    tables: BTreeMap<String, TableEntry>,
}

#[derive(Debug)]
struct CatalogEntry {
    default_database: String,
    databases: BTreeMap<String, DatabaseEntry>,
}

impl CatalogEntry {
    fn new(default_database: &str) -> Self {
        let mut databases = BTreeMap::new();
        databases.insert(default_database.to_string(), DatabaseEntry::default());
        Self {
            default_database: default_database.to_string(),
            databases,
        }
    }
}

#[derive(Debug)]
struct CatalogState {
    catalogs: BTreeMap<String, CatalogEntry>,
    current_catalog: String,
    current_database: String,
    functions: BTreeMap<String, String>,
}

/// Fully resolved `catalog.database.object` path.
struct ObjectPath {
    catalog: String,
    database: String,
    name: String,
}

impl CatalogState {
    fn catalog(&self, name: &str) -> EngineResult<&CatalogEntry> {
        self.catalogs
            .get(name)
            .ok_or_else(|| EngineError::CatalogNotFound {
                catalog: name.to_string(),
            })
    }

    fn database(&self, catalog: &str, database: &str) -> EngineResult<&DatabaseEntry> {
        self.catalog(catalog)?
            .databases
            .get(database)
            .ok_or_else(|| EngineError::DatabaseNotFound {
                database: format!("{}.{}", catalog, database),
            })
    }

    fn database_mut(&mut self, catalog: &str, database: &str) -> EngineResult<&mut DatabaseEntry> {
        self.catalogs
            .get_mut(catalog)
            .ok_or_else(|| EngineError::CatalogNotFound {
                catalog: catalog.to_string(),
            })?
            .databases
            .get_mut(database)
            .ok_or_else(|| EngineError::DatabaseNotFound {
                database: format!("{}.{}", catalog, database),
            })
    }

    /// `[db]` or `[catalog, db]` relative to the current catalog.
    fn resolve_database(&self, path: &[String]) -> EngineResult<(String, String)> {
        match path {
            [db] => Ok((self.current_catalog.clone(), db.clone())),
            [catalog, db] => Ok((catalog.clone(), db.clone())),
            _ => Err(EngineError::invalid(format!(
                "invalid database identifier '{}'",
                path.join(".")
            ))),
        }
    }

    /// `[name]`, `[db, name]` or `[catalog, db, name]`.
    fn resolve_object(&self, path: &[String]) -> EngineResult<ObjectPath> {
        let (catalog, database, name) = match path {
            [name] => (
                self.current_catalog.clone(),
                self.current_database.clone(),
                name.clone(),
            ),
            [db, name] => (self.current_catalog.clone(), db.clone(), name.clone()),
            [catalog, db, name] => (catalog.clone(), db.clone(), name.clone()),
            _ => {
                return Err(EngineError::invalid(format!(
                    "invalid object identifier '{}'",
                    path.join(".")
                )))
            }
        };
        Ok(ObjectPath {
            catalog,
            database,
            name,
        })
    }

    fn lookup(&self, path: &[String]) -> EngineResult<&TableEntry> {
        let obj = self.resolve_object(path)?;
        self.database(&obj.catalog, &obj.database)?
            .tables
            .get(&obj.name)
            .ok_or_else(|| EngineError::TableNotFound {
                table: path.join("."),
            })
    }
}

// ============================================================================
// MemoryEnvironment
// ============================================================================

/// In-memory [`TableEnvironment`].
///
/// Starts with catalog `default_catalog`, database `default_database`, the
/// `core` module and an empty configuration.
#[derive(Debug)]
pub struct MemoryEnvironment {
    state: RwLock<CatalogState>,
    config: ConfigStore,
    dialect: Mutex<SqlDialect>,
    modules: Vec<String>,
    journal: Mutex<Vec<String>>,
    unnamed_tables: AtomicUsize,
}

impl Default for MemoryEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEnvironment {
    /// Environment with the default catalog and database.
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_CATALOG, DEFAULT_DATABASE)
    }

    /// Environment whose built-in catalog and database use the given names.
    pub fn with_defaults(catalog: &str, database: &str) -> Self {
        let mut catalogs = BTreeMap::new();
        catalogs.insert(catalog.to_string(), CatalogEntry::new(database));
        Self {
            state: RwLock::new(CatalogState {
                catalogs,
                current_catalog: catalog.to_string(),
                current_database: database.to_string(),
                functions: BTreeMap::new(),
            }),
            config: ConfigStore::new(),
            dialect: Mutex::new(SqlDialect::Default),
            modules: vec!["core".to_string()],
            journal: Mutex::new(Vec::new()),
            unnamed_tables: AtomicUsize::new(0),
        }
    }

    /// Register a table in the current database, replacing any existing one.
    pub fn register_table(&self, name: &str, schema: TableSchema) -> EngineResult<()> {
        let mut state = self.state.write();
        let (catalog, database) = (state.current_catalog.clone(), state.current_database.clone());
        state.database_mut(&catalog, &database)?.tables.insert(
            name.to_string(),
            TableEntry {
                kind: TableKind::Table,
                schema,
            },
        );
        Ok(())
    }

    /// Register a table under a generated `UnnamedTable$N` name and return it.
    pub fn register_unnamed_table(&self, schema: TableSchema) -> EngineResult<String> {
        let n = self.unnamed_tables.fetch_add(1, Ordering::Relaxed);
        let name = format!("{}{}", UNNAMED_TABLE_PREFIX, n);
        self.register_table(&name, schema)?;
        Ok(name)
    }

    /// Statements executed successfully so far, in order.
    pub fn executed_statements(&self) -> Vec<String> {
        self.journal.lock().clone()
    }

    /// Class registered for a user-defined function.
    pub fn function_class(&self, name: &str) -> Option<String> {
        self.state.read().functions.get(name).cloned()
    }

    fn apply(&self, statement: Statement) -> EngineResult<StatementResult> {
        let mut state = self.state.write();
        match statement {
            Statement::CreateCatalog {
                name,
                if_not_exists,
            } => {
                if state.catalogs.contains_key(&name) {
                    if if_not_exists {
                        return Ok(StatementResult::ok());
                    }
                    return Err(EngineError::AlreadyExists {
                        object: "catalog",
                        name,
                    });
                }
                state.catalogs.insert(name, CatalogEntry::new(DEFAULT_DATABASE));
            }
            Statement::DropCatalog { name, if_exists } => {
                if name == state.current_catalog {
                    return Err(EngineError::invalid(format!(
                        "cannot drop catalog '{}' while it is in use",
                        name
                    )));
                }
                if state.catalogs.remove(&name).is_none() && !if_exists {
                    return Err(EngineError::CatalogNotFound { catalog: name });
                }
            }
            Statement::CreateDatabase {
                path,
                if_not_exists,
            } => {
                let (catalog, database) = state.resolve_database(&path)?;
                let entry = state
                    .catalogs
                    .get_mut(&catalog)
                    .ok_or_else(|| EngineError::CatalogNotFound {
                        catalog: catalog.clone(),
                    })?;
                if entry.databases.contains_key(&database) {
                    if !if_not_exists {
                        return Err(EngineError::AlreadyExists {
                            object: "database",
                            name: database,
                        });
                    }
                } else {
                    entry.databases.insert(database, DatabaseEntry::default());
                }
            }
            Statement::DropDatabase {
                path,
                if_exists,
                cascade,
            } => {
                let (catalog, database) = state.resolve_database(&path)?;
                if catalog == state.current_catalog && database == state.current_database {
                    return Err(EngineError::invalid(format!(
                        "cannot drop database '{}' while it is in use",
                        database
                    )));
                }
                let entry = state
                    .catalogs
                    .get_mut(&catalog)
                    .ok_or_else(|| EngineError::CatalogNotFound {
                        catalog: catalog.clone(),
                    })?;
                let is_empty = entry.databases.get(&database).map(|db| db.tables.is_empty());
                match is_empty {
                    None if if_exists => {}
                    None => {
                        return Err(EngineError::DatabaseNotFound { database });
                    }
                    Some(false) if !cascade => {
                        return Err(EngineError::invalid(format!(
                            "database '{}' is not empty",
                            database
                        )));
                    }
                    Some(_) => {
                        entry.databases.remove(&database);
                    }
                }
            }
            Statement::AlterDatabase { path } => {
                let (catalog, database) = state.resolve_database(&path)?;
                state.database(&catalog, &database)?;
            }
            Statement::CreateTable {
                path,
                if_not_exists,
                schema,
            } => {
                Self::create_object(&mut state, &path, if_not_exists, TableKind::Table, schema)?;
            }
            Statement::CreateView {
                path,
                if_not_exists,
            } => {
                Self::create_object(
                    &mut state,
                    &path,
                    if_not_exists,
                    TableKind::View,
                    TableSchema::new(),
                )?;
            }
            Statement::DropTable { path, if_exists } => {
                Self::drop_object(&mut state, &path, if_exists, TableKind::Table)?;
            }
            Statement::DropView { path, if_exists } => {
                Self::drop_object(&mut state, &path, if_exists, TableKind::View)?;
            }
            Statement::AlterTable { path, rename_to } => {
                let obj = state.resolve_object(&path)?;
                let db = state.database_mut(&obj.catalog, &obj.database)?;
                if !db.tables.contains_key(&obj.name) {
                    return Err(EngineError::TableNotFound {
                        table: path.join("."),
                    });
                }
                if let Some(target) = rename_to {
                    let new_name = target.last().cloned().unwrap_or_default();
                    if db.tables.contains_key(&new_name) {
                        return Err(EngineError::AlreadyExists {
                            object: "table",
                            name: new_name,
                        });
                    }
                    if let Some(entry) = db.tables.remove(&obj.name) {
                        db.tables.insert(new_name, entry);
                    }
                }
            }
            Statement::CreateFunction {
                name,
                if_not_exists,
                class,
            } => {
                if state.functions.contains_key(&name) {
                    if !if_not_exists {
                        return Err(EngineError::AlreadyExists {
                            object: "function",
                            name,
                        });
                    }
                } else {
                    state.functions.insert(name, class);
                }
            }
            Statement::DropFunction { name, if_exists } => {
                if state.functions.remove(&name).is_none() && !if_exists {
                    return Err(EngineError::FunctionNotFound { function: name });
                }
            }
            Statement::AlterFunction {
                name,
                if_exists,
                class,
            } => match state.functions.get_mut(&name) {
                Some(existing) => *existing = class,
                None if if_exists => {}
                None => return Err(EngineError::FunctionNotFound { function: name }),
            },
            Statement::Insert { target, overwrite } => {
                let entry = state.lookup(&target)?;
                if entry.kind == TableKind::View {
                    return Err(EngineError::invalid(format!(
                        "cannot insert into view '{}'",
                        target.join(".")
                    )));
                }
                debug!(table = %target.join("."), overwrite, "insert accepted");
            }
            Statement::Explain { statement } => {
                return Ok(StatementResult::single(
                    "result",
                    format!("== Abstract Syntax Tree ==\n{}", statement),
                ));
            }
        }
        Ok(StatementResult::ok())
    }

    fn create_object(
        state: &mut CatalogState,
        path: &[String],
        if_not_exists: bool,
        kind: TableKind,
        schema: TableSchema,
    ) -> EngineResult<()> {
        let obj = state.resolve_object(path)?;
        let db = state.database_mut(&obj.catalog, &obj.database)?;
        if db.tables.contains_key(&obj.name) {
            if if_not_exists {
                return Ok(());
            }
            return Err(EngineError::AlreadyExists {
                object: if kind == TableKind::View { "view" } else { "table" },
                name: path.join("."),
            });
        }
        db.tables.insert(obj.name, TableEntry { kind, schema });
        Ok(())
    }

    fn drop_object(
        state: &mut CatalogState,
        path: &[String],
        if_exists: bool,
        kind: TableKind,
    ) -> EngineResult<()> {
        let obj = state.resolve_object(path)?;
        let db = state.database_mut(&obj.catalog, &obj.database)?;
        match db.tables.get(&obj.name) {
            Some(entry) if entry.kind == kind => {
                db.tables.remove(&obj.name);
                Ok(())
            }
            Some(_) => Err(EngineError::invalid(format!(
                "'{}' is not a {}",
                path.join("."),
                if kind == TableKind::View { "view" } else { "table" }
            ))),
            None if if_exists => Ok(()),
            None => Err(EngineError::TableNotFound {
                table: path.join("."),
            }),
        }
    }
}

impl TableEnvironment for MemoryEnvironment {
    fn use_catalog(&self, catalog: &str) -> EngineResult<()> {
        let mut state = self.state.write();
        let default_database = state.catalog(catalog)?.default_database.clone();
        state.current_catalog = catalog.to_string();
        state.current_database = default_database;
        Ok(())
    }

    fn use_database(&self, database: &str) -> EngineResult<()> {
        let mut state = self.state.write();
        let path = split_path(database);
        let (catalog, database) = state.resolve_database(&path)?;
        state.database(&catalog, &database)?;
        state.current_catalog = catalog;
        state.current_database = database;
        Ok(())
    }

    fn list_catalogs(&self) -> EngineResult<Vec<String>> {
        Ok(self.state.read().catalogs.keys().cloned().collect())
    }

    fn current_catalog(&self) -> EngineResult<String> {
        Ok(self.state.read().current_catalog.clone())
    }

    fn list_databases(&self) -> EngineResult<Vec<String>> {
        let state = self.state.read();
        Ok(state
            .catalog(&state.current_catalog)?
            .databases
            .keys()
            .cloned()
            .collect())
    }

    fn current_database(&self) -> EngineResult<String> {
        Ok(self.state.read().current_database.clone())
    }

    fn list_tables(&self) -> EngineResult<Vec<String>> {
        let state = self.state.read();
        Ok(state
            .database(&state.current_catalog, &state.current_database)?
            .tables
            .keys()
            .cloned()
            .collect())
    }

    fn list_user_defined_functions(&self) -> EngineResult<Vec<String>> {
        Ok(self.state.read().functions.keys().cloned().collect())
    }

    fn list_modules(&self) -> EngineResult<Vec<String>> {
        Ok(self.modules.clone())
    }

    fn execute_sql(&self, statement: &str) -> EngineResult<StatementResult> {
        let parsed = statements::parse(statement)?;
        let result = self.apply(parsed)?;
        self.journal.lock().push(statement.trim().to_string());
        Ok(result)
    }

    fn scan(&self, table: &str) -> EngineResult<TableSchema> {
        let path = split_path(table.trim());
        Ok(self.state.read().lookup(&path)?.schema.clone())
    }

    fn config(&self) -> &ConfigStore {
        &self.config
    }

    fn dialect(&self) -> SqlDialect {
        *self.dialect.lock()
    }

    fn set_dialect(&self, dialect: SqlDialect) {
        *self.dialect.lock() = dialect;
    }
}
