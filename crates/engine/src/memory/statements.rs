//! Statement shapes understood by the in-memory backend.
//!
//! This is not a SQL parser: each supported statement is recognized by an
//! anchored, case-insensitive pattern and only the parts the catalog needs
//! (names, IF [NOT] EXISTS, column list, function class) are extracted.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tablegate_core::{EngineError, EngineResult, SchemaField, TableSchema};

/// One identifier: back-quoted or a bare word.
const IDENT: &str = r"(?:`[^`]+`|[\w$]+)";

fn pattern(body: &str) -> Regex {
    let path = format!(r"({IDENT}(?:\s*\.\s*{IDENT})*)");
    let source = format!(r"(?is)^{}$", body.replace("{PATH}", &path));
    Regex::new(&source).expect("statement pattern is valid")
}

static CREATE_CATALOG: Lazy<Regex> =
    Lazy::new(|| pattern(r"CREATE\s+CATALOG\s+(IF\s+NOT\s+EXISTS\s+)?{PATH}(?:\s+WITH\s*\(.*\))?\s*"));
static DROP_CATALOG: Lazy<Regex> =
    Lazy::new(|| pattern(r"DROP\s+CATALOG\s+(IF\s+EXISTS\s+)?{PATH}\s*"));
static CREATE_DATABASE: Lazy<Regex> =
    Lazy::new(|| pattern(r"CREATE\s+DATABASE\s+(IF\s+NOT\s+EXISTS\s+)?{PATH}(?:\s+.*)?"));
static DROP_DATABASE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"DROP\s+DATABASE\s+(IF\s+EXISTS\s+)?{PATH}(?:\s+(RESTRICT|CASCADE))?\s*")
});
static ALTER_DATABASE: Lazy<Regex> = Lazy::new(|| pattern(r"ALTER\s+DATABASE\s+{PATH}\s+.+"));
static CREATE_TABLE: Lazy<Regex> = Lazy::new(|| {
    pattern(r"CREATE\s+(?:TEMPORARY\s+)?TABLE\s+(IF\s+NOT\s+EXISTS\s+)?{PATH}(.*)")
});
static DROP_TABLE: Lazy<Regex> =
    Lazy::new(|| pattern(r"DROP\s+(?:TEMPORARY\s+)?TABLE\s+(IF\s+EXISTS\s+)?{PATH}\s*"));
static ALTER_TABLE: Lazy<Regex> = Lazy::new(|| pattern(r"ALTER\s+TABLE\s+{PATH}\s+(.+)"));
static RENAME_TO: Lazy<Regex> = Lazy::new(|| pattern(r"RENAME\s+TO\s+{PATH}\s*"));
static CREATE_VIEW: Lazy<Regex> = Lazy::new(|| {
    pattern(r"CREATE\s+(?:TEMPORARY\s+)?VIEW\s+(IF\s+NOT\s+EXISTS\s+)?{PATH}.*?\s+AS\s+.+")
});
static DROP_VIEW: Lazy<Regex> =
    Lazy::new(|| pattern(r"DROP\s+(?:TEMPORARY\s+)?VIEW\s+(IF\s+EXISTS\s+)?{PATH}\s*"));
static CREATE_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"CREATE\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s+(IF\s+NOT\s+EXISTS\s+)?{PATH}\s+AS\s+'([^']*)'(?:\s+LANGUAGE\s+\w+)?\s*",
    )
});
static DROP_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    pattern(r"DROP\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s+(IF\s+EXISTS\s+)?{PATH}\s*")
});
static ALTER_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    pattern(
        r"ALTER\s+(?:TEMPORARY\s+(?:SYSTEM\s+)?)?FUNCTION\s+(IF\s+EXISTS\s+)?{PATH}\s+AS\s+'([^']*)'(?:\s+LANGUAGE\s+\w+)?\s*",
    )
});
static INSERT: Lazy<Regex> =
    Lazy::new(|| pattern(r"INSERT\s+(INTO|OVERWRITE)\s+(?:TABLE\s+)?{PATH}.*"));
static EXPLAIN: Lazy<Regex> = Lazy::new(|| pattern(r"EXPLAIN\s+(?:PLAN\s+FOR\s+)?(.+)"));

/// Column-list entries that are constraints, not columns.
const CONSTRAINT_PREFIXES: [&str; 4] = ["PRIMARY", "WATERMARK", "CONSTRAINT", "PERIOD"];

/// A recognized statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement {
    CreateCatalog {
        name: String,
        if_not_exists: bool,
    },
    DropCatalog {
        name: String,
        if_exists: bool,
    },
    CreateDatabase {
        path: Vec<String>,
        if_not_exists: bool,
    },
    DropDatabase {
        path: Vec<String>,
        if_exists: bool,
        cascade: bool,
    },
    AlterDatabase { path: Vec<String> },
    CreateTable {
        path: Vec<String>,
        if_not_exists: bool,
        schema: TableSchema,
    },
    DropTable {
        path: Vec<String>,
        if_exists: bool,
    },
    AlterTable {
        path: Vec<String>,
        rename_to: Option<Vec<String>>,
    },
    CreateView {
        path: Vec<String>,
        if_not_exists: bool,
    },
    DropView {
        path: Vec<String>,
        if_exists: bool,
    },
    CreateFunction {
        name: String,
        if_not_exists: bool,
        class: String,
    },
    DropFunction {
        name: String,
        if_exists: bool,
    },
    AlterFunction {
        name: String,
        if_exists: bool,
        class: String,
    },
    Insert {
        target: Vec<String>,
        overwrite: bool,
    },
    Explain { statement: String },
}

/// Recognize `sql`; surrounding whitespace and a trailing `;` are ignored.
pub(crate) fn parse(sql: &str) -> EngineResult<Statement> {
    let sql = sql.trim().trim_end_matches(';').trim_end();

    if let Some(c) = CREATE_CATALOG.captures(sql) {
        return Ok(Statement::CreateCatalog {
            name: single_name(&c[2])?,
            if_not_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = DROP_CATALOG.captures(sql) {
        return Ok(Statement::DropCatalog {
            name: single_name(&c[2])?,
            if_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = CREATE_DATABASE.captures(sql) {
        return Ok(Statement::CreateDatabase {
            path: split_path(&c[2]),
            if_not_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = DROP_DATABASE.captures(sql) {
        return Ok(Statement::DropDatabase {
            path: split_path(&c[2]),
            if_exists: c.get(1).is_some(),
            cascade: c
                .get(3)
                .map(|m| m.as_str().eq_ignore_ascii_case("CASCADE"))
                .unwrap_or(false),
        });
    }
    if let Some(c) = ALTER_DATABASE.captures(sql) {
        return Ok(Statement::AlterDatabase {
            path: split_path(&c[1]),
        });
    }
    if let Some(c) = CREATE_TABLE.captures(sql) {
        return Ok(Statement::CreateTable {
            path: split_path(&c[2]),
            if_not_exists: c.get(1).is_some(),
            schema: parse_columns(&c[3])?,
        });
    }
    if let Some(c) = DROP_TABLE.captures(sql) {
        return Ok(Statement::DropTable {
            path: split_path(&c[2]),
            if_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = ALTER_TABLE.captures(sql) {
        let rename_to = RENAME_TO.captures(c[2].trim()).map(|r| split_path(&r[1]));
        return Ok(Statement::AlterTable {
            path: split_path(&c[1]),
            rename_to,
        });
    }
    if let Some(c) = CREATE_VIEW.captures(sql) {
        return Ok(Statement::CreateView {
            path: split_path(&c[2]),
            if_not_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = DROP_VIEW.captures(sql) {
        return Ok(Statement::DropView {
            path: split_path(&c[2]),
            if_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = CREATE_FUNCTION.captures(sql) {
        return Ok(Statement::CreateFunction {
            name: function_name(&c),
            if_not_exists: c.get(1).is_some(),
            class: c[3].to_string(),
        });
    }
    if let Some(c) = DROP_FUNCTION.captures(sql) {
        return Ok(Statement::DropFunction {
            name: function_name(&c),
            if_exists: c.get(1).is_some(),
        });
    }
    if let Some(c) = ALTER_FUNCTION.captures(sql) {
        return Ok(Statement::AlterFunction {
            name: function_name(&c),
            if_exists: c.get(1).is_some(),
            class: c[3].to_string(),
        });
    }
    if let Some(c) = INSERT.captures(sql) {
        return Ok(Statement::Insert {
            target: split_path(&c[2]),
            overwrite: c[1].eq_ignore_ascii_case("OVERWRITE"),
        });
    }
    if let Some(c) = EXPLAIN.captures(sql) {
        return Ok(Statement::Explain {
            statement: c[1].trim().to_string(),
        });
    }

    Err(EngineError::UnsupportedStatement {
        statement: sql.to_string(),
    })
}

/// Split `a.`b c`.d` into its unquoted parts.
pub(crate) fn split_path(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for ch in raw.chars() {
        match ch {
            '`' => quoted = !quoted,
            '.' if !quoted => parts.push(std::mem::take(&mut current).trim().to_string()),
            c => current.push(c),
        }
    }
    parts.push(current.trim().to_string());
    parts
}

fn single_name(raw: &str) -> EngineResult<String> {
    let mut parts = split_path(raw);
    if parts.len() != 1 {
        return Err(EngineError::invalid(format!(
            "expected an unqualified name, got '{}'",
            raw
        )));
    }
    Ok(parts.remove(0))
}

fn function_name(c: &Captures<'_>) -> String {
    split_path(&c[2]).pop().unwrap_or_default()
}

/// Parse the text following a table name. A leading parenthesized block is
/// the column list; anything else (`WITH (...)`, `AS SELECT`) yields an
/// empty schema.
fn parse_columns(rest: &str) -> EngineResult<TableSchema> {
    let rest = rest.trim_start();
    if !rest.starts_with('(') {
        return Ok(TableSchema::new());
    }
    let body = balanced_block(rest)
        .ok_or_else(|| EngineError::invalid("unbalanced parentheses in column list"))?;

    let mut fields = Vec::new();
    for entry in split_top_level(body) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let head = entry.split_whitespace().next().unwrap_or_default();
        if CONSTRAINT_PREFIXES
            .iter()
            .any(|p| head.eq_ignore_ascii_case(p))
        {
            continue;
        }
        let (name, data_type) = split_column(entry);
        if data_type.is_empty() {
            return Err(EngineError::invalid(format!(
                "column '{}' has no type",
                name
            )));
        }
        fields.push(SchemaField { name, data_type });
    }
    Ok(fields.into_iter().collect())
}

fn split_column(entry: &str) -> (String, String) {
    if let Some(stripped) = entry.strip_prefix('`') {
        if let Some(end) = stripped.find('`') {
            return (
                stripped[..end].to_string(),
                stripped[end + 1..].trim().to_string(),
            );
        }
    }
    match entry.find(char::is_whitespace) {
        Some(idx) => (entry[..idx].to_string(), entry[idx..].trim().to_string()),
        None => (entry.to_string(), String::new()),
    }
}

/// Content between the opening parenthesis at `s[0]` and its match.
fn balanced_block(s: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut quoted = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '\'' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(&s[1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that are not nested in parentheses, angle brackets or quotes.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quoted = false;
    let mut start = 0;
    for (idx, ch) in s.char_indices() {
        match ch {
            '\'' => quoted = !quoted,
            '(' | '<' if !quoted => depth += 1,
            ')' | '>' if !quoted => depth -= 1,
            ',' if !quoted && depth == 0 => {
                parts.push(&s[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}
