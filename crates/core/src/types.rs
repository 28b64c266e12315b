//! Values exchanged between the router and a backend
//!
//! This module defines:
//! - SqlDialect: which SQL grammar the backend parses with
//! - TableSchema / SchemaField: resolved schema of a table or view
//! - StatementResult: tabular result of `execute_sql`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL grammar selected through the `table.sql-dialect` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// The backend's native dialect.
    #[default]
    Default,
    /// Hive-compatible dialect.
    Hive,
}

impl SqlDialect {
    /// Lowercase option value, as stored in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            SqlDialect::Default => "default",
            SqlDialect::Hive => "hive",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    /// Case-insensitive; surrounding whitespace and single quotes are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('\'');
        if trimmed.eq_ignore_ascii_case("default") {
            Ok(SqlDialect::Default)
        } else if trimmed.eq_ignore_ascii_case("hive") {
            Ok(SqlDialect::Hive)
        } else {
            Err(format!(
                "unknown SQL dialect '{}', expected 'default' or 'hive'",
                s.trim()
            ))
        }
    }
}

/// One column of a [`TableSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Column name
    pub name: String,
    /// Declared type, as written in the DDL (e.g. `BIGINT NOT NULL`)
    pub data_type: String,
}

/// Resolved schema of a table or view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableSchema {
    fields: Vec<SchemaField>,
}

impl TableSchema {
    /// Empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column append.
    pub fn field(mut self, name: impl Into<String>, data_type: impl Into<String>) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            data_type: data_type.into(),
        });
        self
    }

    /// Number of columns.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Column name at `index`.
    pub fn field_name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.name.as_str())
    }

    /// Column type at `index`.
    pub fn field_type(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.data_type.as_str())
    }

    /// All columns, in declaration order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }
}

impl FromIterator<SchemaField> for TableSchema {
    fn from_iter<I: IntoIterator<Item = SchemaField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Tabular result of running a statement on the backend.
///
/// DDL statements usually produce a single `result` column with `OK`;
/// `EXPLAIN` produces one row whose first field is the plan text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatementResult {
    /// Column names
    pub columns: Vec<String>,
    /// Rows, each as wide as `columns`
    pub rows: Vec<Vec<String>>,
}

impl StatementResult {
    /// The `result: OK` shape returned for statements without output.
    pub fn ok() -> Self {
        Self {
            columns: vec!["result".to_string()],
            rows: vec![vec!["OK".to_string()]],
        }
    }

    /// Single-column, single-row result.
    pub fn single(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            columns: vec![column.into()],
            rows: vec![vec![value.into()]],
        }
    }

    /// First field of the first row.
    pub fn first_field(&self) -> Option<&str> {
        self.rows.first()?.first().map(String::as_str)
    }
}
