//! Schema and plan inspection handlers.

use tablegate_core::{Command, EngineError};
use tablegate_engine::TableEnvironment;

use super::required;
use crate::{Error, OutputSink, Result};

/// Header line of DESCRIBE output.
const DESCRIBE_HEADER: &str = "Column\tType";

/// Handle DESCRIBE / DESC.
///
/// Emits the header followed by one `name\ttype` line per field.
pub(crate) fn describe(
    env: &dyn TableEnvironment,
    cmd: &Command,
    sink: &dyn OutputSink,
) -> Result<()> {
    let table = required(cmd, 0)?;
    let schema = env.scan(table)?;

    let mut lines = Vec::with_capacity(schema.field_count() + 1);
    lines.push(DESCRIBE_HEADER.to_string());
    for i in 0..schema.field_count() {
        if let (Some(name), Some(data_type)) = (schema.field_name(i), schema.field_type(i)) {
            lines.push(format!("{}\t{}", name, data_type));
        }
    }
    sink.emit(&lines.join("\n"));
    Ok(())
}

/// Handle EXPLAIN.
///
/// Runs the command's own statement text, falling back to the raw SQL of the
/// call and then to `EXPLAIN <operand 0>` for hand-built commands. Emits the
/// first field of the first row; a result without rows is a backend failure.
pub(crate) fn explain(
    env: &dyn TableEnvironment,
    cmd: &Command,
    raw_sql: &str,
    sink: &dyn OutputSink,
) -> Result<()> {
    let statement = if !cmd.sql().trim().is_empty() {
        cmd.sql().to_string()
    } else if !raw_sql.trim().is_empty() {
        raw_sql.to_string()
    } else {
        match cmd.operand(0).map(str::trim) {
            Some(target) if !target.is_empty() => format!("EXPLAIN {}", target),
            _ => {
                return Err(Error::MissingOperand {
                    command: cmd.kind().as_str().to_string(),
                    index: 0,
                })
            }
        }
    };

    let result = env.execute_sql(&statement)?;
    let plan = result
        .first_field()
        .ok_or_else(|| EngineError::internal("EXPLAIN returned no rows"))?;
    sink.emit(plan);
    Ok(())
}
