//! Catalog navigation and listing handlers.

use tablegate_core::Command;
use tablegate_engine::TableEnvironment;
use tracing::info;

use super::required;
use crate::{OutputSink, Result};

/// Handle USE CATALOG.
pub(crate) fn use_catalog(env: &dyn TableEnvironment, cmd: &Command) -> Result<()> {
    let catalog = required(cmd, 0)?;
    env.use_catalog(catalog)?;
    info!(catalog, "switched catalog");
    Ok(())
}

/// Handle USE.
pub(crate) fn use_database(env: &dyn TableEnvironment, cmd: &Command) -> Result<()> {
    let database = required(cmd, 0)?;
    env.use_database(database)?;
    info!(database, "switched database");
    Ok(())
}

/// Handle SHOW CATALOGS.
pub(crate) fn show_catalogs(env: &dyn TableEnvironment, sink: &dyn OutputSink) -> Result<()> {
    sink.emit(&listing("catalogs", &env.list_catalogs()?));
    Ok(())
}

/// Handle SHOW CURRENT CATALOG.
pub(crate) fn show_current_catalog(
    env: &dyn TableEnvironment,
    sink: &dyn OutputSink,
) -> Result<()> {
    sink.emit(&format!("current catalog: {}", env.current_catalog()?));
    Ok(())
}

/// Handle SHOW DATABASES.
pub(crate) fn show_databases(env: &dyn TableEnvironment, sink: &dyn OutputSink) -> Result<()> {
    sink.emit(&listing("databases", &env.list_databases()?));
    Ok(())
}

/// Handle SHOW CURRENT DATABASE.
pub(crate) fn show_current_database(
    env: &dyn TableEnvironment,
    sink: &dyn OutputSink,
) -> Result<()> {
    sink.emit(&format!("current database: {}", env.current_database()?));
    Ok(())
}

/// Handle SHOW TABLES. Anonymous tables are hidden.
pub(crate) fn show_tables(
    env: &dyn TableEnvironment,
    unnamed_prefix: &str,
    sink: &dyn OutputSink,
) -> Result<()> {
    let tables: Vec<String> = env
        .list_tables()?
        .into_iter()
        .filter(|name| unnamed_prefix.is_empty() || !name.starts_with(unnamed_prefix))
        .collect();
    sink.emit(&listing("tables", &tables));
    Ok(())
}

/// Handle SHOW FUNCTIONS.
pub(crate) fn show_functions(env: &dyn TableEnvironment, sink: &dyn OutputSink) -> Result<()> {
    sink.emit(&listing("functions", &env.list_user_defined_functions()?));
    Ok(())
}

/// Handle SHOW MODULES.
pub(crate) fn show_modules(env: &dyn TableEnvironment, sink: &dyn OutputSink) -> Result<()> {
    sink.emit(&listing("modules", &env.list_modules()?));
    Ok(())
}

fn listing(label: &str, names: &[String]) -> String {
    format!("{}: [{}]", label, names.join(", "))
}
