//! Statement classification.
//!
//! The router only needs to know which [`CommandKind`] a statement is and
//! which operands it carries, so classification is a contract
//! ([`StatementClassifier`]) with one shipped implementation that matches
//! anchored, case-insensitive patterns in a fixed order.

use once_cell::sync::Lazy;
use regex::Regex;
use tablegate_core::{Command, CommandKind};
use tracing::debug;

use crate::Result;

/// Turns SQL text into an ordered list of commands.
pub trait StatementClassifier: Send + Sync {
    /// Classify every statement in `sql`, in source order.
    fn classify(&self, sql: &str) -> Result<Vec<Command>>;
}

// =============================================================================
// Pattern table
// =============================================================================
//
// Tried top to bottom; the first match wins. Each capture group that
// participates in the match becomes one operand, so DDL and SELECT patterns
// capture the whole statement as operand 0.

fn pattern(body: &str) -> Regex {
    Regex::new(&format!(r"(?is)^{}\s*$", body)).expect("classifier pattern is valid")
}

static PATTERNS: Lazy<Vec<(CommandKind, Regex)>> = Lazy::new(|| {
    use CommandKind::*;
    [
        (InsertInto, r"(INSERT\s+INTO\s.*)"),
        (InsertOverwrite, r"(INSERT\s+OVERWRITE\s.*)"),
        (CreateTable, r"(CREATE\s+(?:TEMPORARY\s+)?TABLE\s.*)"),
        (DropTable, r"(DROP\s+(?:TEMPORARY\s+)?TABLE\s.*)"),
        (AlterTable, r"(ALTER\s+TABLE\s.*)"),
        (CreateView, r"(CREATE\s+(?:TEMPORARY\s+)?VIEW\s.*)"),
        (DropView, r"(DROP\s+(?:TEMPORARY\s+)?VIEW\s.*)"),
        (CreateDatabase, r"(CREATE\s+DATABASE\s.*)"),
        (DropDatabase, r"(DROP\s+DATABASE\s.*)"),
        (AlterDatabase, r"(ALTER\s+DATABASE\s.*)"),
        (CreateFunction, r"(CREATE\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s.*)"),
        (DropFunction, r"(DROP\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s.*)"),
        (AlterFunction, r"(ALTER\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s.*)"),
        (CreateCatalog, r"(CREATE\s+CATALOG\s.*)"),
        (DropCatalog, r"(DROP\s+CATALOG\s.*)"),
        (UseCatalog, r"USE\s+CATALOG(?:\s+(.+?))?"),
        (Use, r"USE(?:\s+(.+?))?"),
        (ShowCatalogs, r"SHOW\s+CATALOGS"),
        (ShowCurrentCatalog, r"SHOW\s+CURRENT\s+CATALOG"),
        (ShowDatabases, r"SHOW\s+DATABASES"),
        (ShowCurrentDatabase, r"SHOW\s+CURRENT\s+DATABASE"),
        (ShowTables, r"SHOW\s+TABLES"),
        (ShowFunctions, r"SHOW\s+(?:USER\s+)?FUNCTIONS"),
        (ShowModules, r"SHOW\s+(?:FULL\s+)?MODULES"),
        (Describe, r"DESCRIBE(?:\s+(.+?))?"),
        (Desc, r"DESC(?:\s+(.+?))?"),
        (Explain, r"EXPLAIN(?:\s+(?:PLAN\s+FOR\s+)?(.+?))?"),
        (Select, r"((?:WITH|SELECT)\b.*)"),
        (
            Set,
            r"SET(?:\s+('[^']*'|[^\s=]+)(?:\s*=\s*(.*?)|\s+(.*?))?)?",
        ),
        (Reset, r"RESET(?:\s+(.+?))?"),
    ]
    .into_iter()
    .map(|(kind, body)| (kind, pattern(body)))
    .collect()
});

// =============================================================================
// Statement splitting
// =============================================================================

/// Split SQL text into statements.
///
/// Splits on `;` outside single quotes, double quotes and back-quotes, drops
/// `--` comments and returns the trimmed, non-empty statements.
///
/// ```
/// use tablegate_executor::split_statements;
///
/// let parts = split_statements("USE db1;\n-- comment\nSELECT ';' FROM t;;");
/// assert_eq!(parts, vec!["USE db1", "SELECT ';' FROM t"]);
/// ```
pub fn split_statements(sql: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => {
                    quote = Some(c);
                    current.push(c);
                }
                '-' if chars.peek() == Some(&'-') => {
                    for skipped in chars.by_ref() {
                        if skipped == '\n' {
                            current.push('\n');
                            break;
                        }
                    }
                }
                ';' => push_statement(&mut statements, &mut current),
                _ => current.push(c),
            },
        }
    }
    push_statement(&mut statements, &mut current);
    statements
}

fn push_statement(statements: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
    current.clear();
}

// =============================================================================
// PatternClassifier
// =============================================================================

/// Default classifier: split, then match each statement against the pattern
/// table. Text matching no pattern becomes [`CommandKind::Unknown`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternClassifier;

impl PatternClassifier {
    /// Create the classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one already split statement.
    pub fn classify_statement(&self, statement: &str) -> Command {
        let statement = statement.trim();
        for (kind, regex) in PATTERNS.iter() {
            if let Some(caps) = regex.captures(statement) {
                let operands = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| operand(*kind, m.as_str()))
                    .collect();
                return Command::new(*kind, operands).with_sql(statement);
            }
        }
        Command::new(CommandKind::Unknown, vec![statement.to_string()]).with_sql(statement)
    }
}

impl StatementClassifier for PatternClassifier {
    fn classify(&self, sql: &str) -> Result<Vec<Command>> {
        let commands: Vec<Command> = split_statements(sql)
            .iter()
            .map(|statement| self.classify_statement(statement))
            .collect();
        debug!(
            commands = commands.len(),
            kinds = ?commands.iter().map(Command::kind).collect::<Vec<_>>(),
            "classified SQL text"
        );
        Ok(commands)
    }
}

/// Trim an operand; configuration keys and values also lose one layer of
/// single quotes (`SET 'k' = 'v'`).
fn operand(kind: CommandKind, raw: &str) -> String {
    let trimmed = raw.trim();
    match kind {
        CommandKind::Set | CommandKind::Reset => unquote(trimmed).to_string(),
        _ => trimmed.to_string(),
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('\'')
        .and_then(|t| t.strip_suffix('\''))
        .unwrap_or(text)
}
