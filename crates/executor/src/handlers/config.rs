//! Configuration handlers (SET, RESET).

use tablegate_core::{Command, SqlDialect, SQL_DIALECT_KEY};
use tablegate_engine::TableEnvironment;
use tracing::info;

use super::required;
use crate::{Error, OptionRegistry, OutputSink, Result};

/// Handle SET.
///
/// `SET key` emits `key=value` with the effective value. `SET key value`
/// stores the value; the dialect key is parsed and applied to the
/// environment as well.
pub(crate) fn set(
    env: &dyn TableEnvironment,
    registry: &OptionRegistry,
    cmd: &Command,
    sink: &dyn OutputSink,
) -> Result<()> {
    let key = required(cmd, 0)?;
    let option = registry.lookup(key).ok_or_else(|| Error::InvalidConfigKey {
        key: key.to_string(),
    })?;

    let value = match cmd.operand(1) {
        Some(value) => value,
        None => {
            let effective = if key == SQL_DIALECT_KEY {
                env.dialect().as_str().to_string()
            } else {
                env.config()
                    .get(key)
                    .or_else(|| option.default_value.clone())
                    .unwrap_or_default()
            };
            sink.emit(&format!("{}={}", key, effective));
            return Ok(());
        }
    };

    if key == SQL_DIALECT_KEY {
        let dialect: SqlDialect = value
            .parse()
            .map_err(|reason| Error::InvalidInput { reason })?;
        env.set_dialect(dialect);
        env.config().set(key, dialect.as_str());
        info!(key, dialect = %dialect, "sql dialect set");
    } else {
        env.config().set(key, value);
        info!(key, value, "configuration set");
    }
    Ok(())
}

/// Handle RESET.
///
/// `RESET ALL` clears every stored value and restores the default dialect;
/// `RESET key` removes only that key.
pub(crate) fn reset(env: &dyn TableEnvironment, cmd: &Command) -> Result<()> {
    let key = required(cmd, 0)?;
    if key.eq_ignore_ascii_case("ALL") {
        let removed = env.config().clear();
        env.set_dialect(SqlDialect::default());
        info!(removed, "configuration reset");
        return Ok(());
    }

    let previous = env.config().remove(key);
    if key == SQL_DIALECT_KEY {
        env.set_dialect(SqlDialect::default());
    }
    info!(key, was_set = previous.is_some(), "configuration key reset");
    Ok(())
}
