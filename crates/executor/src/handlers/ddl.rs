//! DDL-class handler.
//!
//! Inserts and catalog, database, table, view and function definitions all
//! take the same path: the statement is handed to the backend verbatim while
//! the router's mutation lock is held.

use tablegate_core::Command;
use tablegate_engine::TableEnvironment;
use tracing::info;

use super::required;
use crate::{MutationLock, Result};

/// Execute a DDL-class command under the mutation lock.
pub(crate) fn execute(
    env: &dyn TableEnvironment,
    lock: &MutationLock,
    cmd: &Command,
) -> Result<()> {
    let statement = required(cmd, 0)?;
    {
        let _guard = lock.acquire();
        env.execute_sql(statement)?;
    }
    info!(command = %cmd.kind(), "statement executed");
    Ok(())
}
