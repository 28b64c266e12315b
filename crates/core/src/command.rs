//! Classified SQL commands.
//!
//! A [`Command`] is what the statement classifier produces for one SQL
//! statement and what the router consumes. Commands are:
//! - **Immutable**: built once, consumed once
//! - **Self-describing**: the kind fixes the operand contract
//! - **Serializable**: can be converted to/from JSON for logging or replay

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the router treats a command kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandCategory {
    /// Read-only, produces output or switches the session's current object
    Introspective,
    /// DDL/DML against the catalog, runs under the mutation lock
    Mutating,
    /// SET / RESET against the backend configuration
    Config,
    /// Recognized or not, the router refuses to run it
    Unsupported,
}

/// The closed set of statement kinds the classifier can produce.
///
/// # Categories
///
/// | Category | Kinds |
/// |----------|-------|
/// | Introspective | `Use`, `UseCatalog`, `Show*`, `Desc`, `Describe`, `Explain` |
/// | Mutating | `InsertInto`, `InsertOverwrite`, `Create*`, `Drop*`, `Alter*` |
/// | Config | `Set`, `Reset` |
/// | Unsupported | `Select`, `Unknown` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    // ==================== Mutating (15) ====================
    /// INSERT INTO ...
    InsertInto,
    /// INSERT OVERWRITE ...
    InsertOverwrite,
    /// CREATE [TEMPORARY] TABLE ...
    CreateTable,
    /// DROP [TEMPORARY] TABLE ...
    DropTable,
    /// ALTER TABLE ...
    AlterTable,
    /// CREATE [TEMPORARY] VIEW ...
    CreateView,
    /// DROP [TEMPORARY] VIEW ...
    DropView,
    /// CREATE DATABASE ...
    CreateDatabase,
    /// DROP DATABASE ...
    DropDatabase,
    /// ALTER DATABASE ...
    AlterDatabase,
    /// CREATE [TEMPORARY [SYSTEM]] FUNCTION ...
    CreateFunction,
    /// DROP [TEMPORARY [SYSTEM]] FUNCTION ...
    DropFunction,
    /// ALTER [TEMPORARY [SYSTEM]] FUNCTION ...
    AlterFunction,
    /// CREATE CATALOG ...
    CreateCatalog,
    /// DROP CATALOG ...
    DropCatalog,

    // ==================== Introspective ====================
    /// USE CATALOG name
    UseCatalog,
    /// USE name
    Use,
    /// SHOW CATALOGS
    ShowCatalogs,
    /// SHOW CURRENT CATALOG
    ShowCurrentCatalog,
    /// SHOW DATABASES
    ShowDatabases,
    /// SHOW CURRENT DATABASE
    ShowCurrentDatabase,
    /// SHOW TABLES
    ShowTables,
    /// SHOW FUNCTIONS
    ShowFunctions,
    /// SHOW MODULES
    ShowModules,
    /// DESCRIBE name
    Describe,
    /// DESC name
    Desc,
    /// EXPLAIN statement
    Explain,

    // ==================== Config ====================
    /// SET key=value | SET key value | SET key
    Set,
    /// RESET key | RESET ALL
    Reset,

    // ==================== Unsupported ====================
    /// SELECT / WITH ... SELECT
    Select,
    /// Text that matched no known statement shape
    Unknown,
}

impl CommandKind {
    /// Every kind, in classifier match order.
    pub const ALL: [CommandKind; 31] = [
        CommandKind::InsertInto,
        CommandKind::InsertOverwrite,
        CommandKind::CreateTable,
        CommandKind::DropTable,
        CommandKind::AlterTable,
        CommandKind::CreateView,
        CommandKind::DropView,
        CommandKind::CreateDatabase,
        CommandKind::DropDatabase,
        CommandKind::AlterDatabase,
        CommandKind::CreateFunction,
        CommandKind::DropFunction,
        CommandKind::AlterFunction,
        CommandKind::CreateCatalog,
        CommandKind::DropCatalog,
        CommandKind::UseCatalog,
        CommandKind::Use,
        CommandKind::ShowCatalogs,
        CommandKind::ShowCurrentCatalog,
        CommandKind::ShowDatabases,
        CommandKind::ShowCurrentDatabase,
        CommandKind::ShowTables,
        CommandKind::ShowFunctions,
        CommandKind::ShowModules,
        CommandKind::Describe,
        CommandKind::Desc,
        CommandKind::Explain,
        CommandKind::Select,
        CommandKind::Set,
        CommandKind::Reset,
        CommandKind::Unknown,
    ];

    /// Dispatch category of this kind.
    pub fn category(self) -> CommandCategory {
        use CommandKind::*;
        match self {
            InsertInto | InsertOverwrite | CreateTable | DropTable | AlterTable | CreateView
            | DropView | CreateDatabase | DropDatabase | AlterDatabase | CreateFunction
            | DropFunction | AlterFunction | CreateCatalog | DropCatalog => {
                CommandCategory::Mutating
            }
            UseCatalog | Use | ShowCatalogs | ShowCurrentCatalog | ShowDatabases
            | ShowCurrentDatabase | ShowTables | ShowFunctions | ShowModules | Describe | Desc
            | Explain => CommandCategory::Introspective,
            Set | Reset => CommandCategory::Config,
            Select | Unknown => CommandCategory::Unsupported,
        }
    }

    /// Number of operands the router requires before it will run the command.
    pub fn min_operands(self) -> usize {
        use CommandKind::*;
        match self.category() {
            CommandCategory::Mutating => 1,
            CommandCategory::Config => 1,
            CommandCategory::Unsupported => 0,
            CommandCategory::Introspective => match self {
                Use | UseCatalog | Describe | Desc => 1,
                _ => 0,
            },
        }
    }

    /// Whether this kind runs under the mutation lock.
    pub fn is_mutating(self) -> bool {
        self.category() == CommandCategory::Mutating
    }

    /// Statement keyword form, e.g. `SHOW CURRENT CATALOG`.
    pub fn as_str(self) -> &'static str {
        use CommandKind::*;
        match self {
            InsertInto => "INSERT INTO",
            InsertOverwrite => "INSERT OVERWRITE",
            CreateTable => "CREATE TABLE",
            DropTable => "DROP TABLE",
            AlterTable => "ALTER TABLE",
            CreateView => "CREATE VIEW",
            DropView => "DROP VIEW",
            CreateDatabase => "CREATE DATABASE",
            DropDatabase => "DROP DATABASE",
            AlterDatabase => "ALTER DATABASE",
            CreateFunction => "CREATE FUNCTION",
            DropFunction => "DROP FUNCTION",
            AlterFunction => "ALTER FUNCTION",
            CreateCatalog => "CREATE CATALOG",
            DropCatalog => "DROP CATALOG",
            UseCatalog => "USE CATALOG",
            Use => "USE",
            ShowCatalogs => "SHOW CATALOGS",
            ShowCurrentCatalog => "SHOW CURRENT CATALOG",
            ShowDatabases => "SHOW DATABASES",
            ShowCurrentDatabase => "SHOW CURRENT DATABASE",
            ShowTables => "SHOW TABLES",
            ShowFunctions => "SHOW FUNCTIONS",
            ShowModules => "SHOW MODULES",
            Describe => "DESCRIBE",
            Desc => "DESC",
            Explain => "EXPLAIN",
            Select => "SELECT",
            Set => "SET",
            Reset => "RESET",
            Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified statement.
///
/// `operands[0]` is present for every kind with a non-zero
/// [`CommandKind::min_operands`] when produced by the classifier; hand-built
/// commands may violate that and the router rejects them.
///
/// # Example
///
/// ```
/// use tablegate_core::{Command, CommandKind};
///
/// let cmd = Command::new(CommandKind::Use, vec!["db1".to_string()]);
/// assert_eq!(cmd.operand(0), Some("db1"));
/// assert_eq!(cmd.operand(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    kind: CommandKind,
    operands: Vec<String>,
    /// Source text of the statement; empty for hand-built commands.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    sql: String,
}

impl Command {
    /// Build a command with no source text.
    pub fn new(kind: CommandKind, operands: Vec<String>) -> Self {
        Self {
            kind,
            operands,
            sql: String::new(),
        }
    }

    /// Attach the statement text the command was classified from.
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = sql.into();
        self
    }

    /// Statement kind.
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    /// All operands, in order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Operand at `index`, if present.
    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(String::as_str)
    }

    /// Statement text, empty when the command was built by hand.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ddl_kinds_are_mutating_and_need_statement() {
        for kind in CommandKind::ALL {
            if kind.is_mutating() {
                assert_eq!(kind.min_operands(), 1, "{kind}");
            }
        }
        assert!(CommandKind::CreateCatalog.is_mutating());
        assert!(CommandKind::InsertOverwrite.is_mutating());
        assert!(!CommandKind::Set.is_mutating());
        assert!(!CommandKind::ShowTables.is_mutating());
    }

    #[test]
    fn arity_contract() {
        assert_eq!(CommandKind::Use.min_operands(), 1);
        assert_eq!(CommandKind::UseCatalog.min_operands(), 1);
        assert_eq!(CommandKind::Desc.min_operands(), 1);
        assert_eq!(CommandKind::Describe.min_operands(), 1);
        assert_eq!(CommandKind::Set.min_operands(), 1);
        assert_eq!(CommandKind::Reset.min_operands(), 1);
        assert_eq!(CommandKind::Explain.min_operands(), 0);
        assert_eq!(CommandKind::ShowCatalogs.min_operands(), 0);
        assert_eq!(CommandKind::Select.min_operands(), 0);
    }

    #[test]
    fn categories() {
        assert_eq!(CommandKind::Reset.category(), CommandCategory::Config);
        assert_eq!(CommandKind::Explain.category(), CommandCategory::Introspective);
        assert_eq!(CommandKind::Select.category(), CommandCategory::Unsupported);
        assert_eq!(CommandKind::Unknown.category(), CommandCategory::Unsupported);
    }

    #[test]
    fn all_is_exhaustive_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in CommandKind::ALL {
            assert!(seen.insert(kind));
        }
        assert_eq!(seen.len(), 31);
    }

    #[test]
    fn display_uses_keyword_form() {
        assert_eq!(CommandKind::ShowCurrentCatalog.to_string(), "SHOW CURRENT CATALOG");
        assert_eq!(CommandKind::InsertInto.to_string(), "INSERT INTO");
    }

    #[test]
    fn command_json_shape() {
        let cmd = Command::new(
            CommandKind::Set,
            vec!["table.sql-dialect".to_string(), "hive".to_string()],
        );
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"SET","operands":["table.sql-dialect","hive"]}"#
        );

        let with_sql = cmd.clone().with_sql("SET table.sql-dialect=hive");
        let back: Command = serde_json::from_str(&serde_json::to_string(&with_sql).unwrap()).unwrap();
        assert_eq!(back, with_sql);
        assert_eq!(back.sql(), "SET table.sql-dialect=hive");
    }

    #[test]
    fn out_of_range_operand_is_none() {
        let cmd = Command::new(CommandKind::Reset, vec![]);
        assert_eq!(cmd.operand(0), None);
        assert!(cmd.operands().is_empty());
        assert_eq!(cmd.sql(), "");
    }
}
