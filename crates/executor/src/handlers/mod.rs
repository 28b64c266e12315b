//! Command handlers organized by category.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `catalog` | `USE CATALOG`, `USE`, `SHOW CATALOGS/DATABASES/TABLES/FUNCTIONS/MODULES`, `SHOW CURRENT *` |
//! | `describe` | `DESCRIBE`, `DESC`, `EXPLAIN` |
//! | `config` | `SET`, `RESET` |
//! | `ddl` | `INSERT`, `CREATE/DROP/ALTER` catalog, database, table, view, function |

pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod ddl;
pub(crate) mod describe;

use tablegate_core::Command;

use crate::{Error, Result};

/// Operand `index` of `cmd`, rejecting a missing or blank one.
pub(crate) fn required(cmd: &Command, index: usize) -> Result<&str> {
    match cmd.operand(index).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingOperand {
            command: cmd.kind().as_str().to_string(),
            index,
        }),
    }
}
