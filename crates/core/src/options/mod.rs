//! Static configuration option catalogs.
//!
//! Each backend subsystem declares its options in one [`OptionSource`]: a
//! name plus an accessor returning the subsystem's [`ConfigOption`] list.
//! The router folds the sources into a registry and uses it to validate
//! `SET` / `RESET` keys. Adding an option is a one-line change to the
//! owning source file.
//!
//! | Source | Prefix | File |
//! |--------|--------|------|
//! | `table` | `table.*` | `table.rs` |
//! | `execution` | `table.exec.*` | `execution.rs` |
//! | `optimizer` | `table.optimizer.*` | `optimizer.rs` |
//! | `pipeline` | `pipeline.*` | `pipeline.rs` |

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod execution;
pub mod optimizer;
pub mod pipeline;
pub mod table;

/// Key of the option that selects the SQL dialect.
pub const SQL_DIALECT_KEY: &str = "table.sql-dialect";

/// Built-in option sources, in registry fold order.
pub const BUILTIN_SOURCES: [OptionSource; 4] = [
    OptionSource::new("table", table::options),
    OptionSource::new("execution", execution::options),
    OptionSource::new("optimizer", optimizer::options),
    OptionSource::new("pipeline", pipeline::options),
];

/// Declared value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// `true` / `false`
    Boolean,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    Long,
    /// Floating point
    Double,
    /// Free-form string
    String,
    /// Duration such as `10 s` or `200 ms`
    Duration,
    /// Memory size such as `64 kb`
    MemorySize,
    /// One of a fixed set of upper-case names
    Enum,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Boolean => "Boolean",
            OptionType::Integer => "Integer",
            OptionType::Long => "Long",
            OptionType::Double => "Double",
            OptionType::String => "String",
            OptionType::Duration => "Duration",
            OptionType::MemorySize => "MemorySize",
            OptionType::Enum => "Enum",
        };
        f.write_str(name)
    }
}

/// Metadata for one configuration key.
///
/// ```
/// use tablegate_core::{ConfigOption, OptionType};
///
/// let opt = ConfigOption::new("table.dml-sync", OptionType::Boolean)
///     .default_value("false")
///     .description("Run DML statements synchronously.");
/// assert_eq!(opt.key, "table.dml-sync");
/// assert_eq!(opt.default_value.as_deref(), Some("false"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOption {
    /// Fully qualified key, e.g. `table.exec.state.ttl`
    pub key: String,
    /// Default rendered as a string; `None` when the option has no default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Declared value type
    pub data_type: OptionType,
}

impl ConfigOption {
    /// Start declaring an option with no default and no description.
    pub fn new(key: impl Into<String>, data_type: OptionType) -> Self {
        Self {
            key: key.into(),
            default_value: None,
            description: String::new(),
            data_type,
        }
    }

    /// Set the default value.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// A key is well-formed when it is non-empty and contains no whitespace.
    pub fn has_valid_key(&self) -> bool {
        !self.key.is_empty() && !self.key.chars().any(char::is_whitespace)
    }
}

/// A named accessor for one subsystem's options.
#[derive(Clone, Copy)]
pub struct OptionSource {
    name: &'static str,
    options: fn() -> Vec<ConfigOption>,
}

impl OptionSource {
    /// Declare a source.
    pub const fn new(name: &'static str, options: fn() -> Vec<ConfigOption>) -> Self {
        Self { name, options }
    }

    /// Source name, used in log messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Materialize the option list.
    pub fn options(&self) -> Vec<ConfigOption> {
        (self.options)()
    }
}

impl fmt::Debug for OptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_keys_are_well_formed() {
        for source in BUILTIN_SOURCES {
            for opt in source.options() {
                assert!(opt.has_valid_key(), "{}: {:?}", source.name(), opt.key);
                assert!(!opt.description.is_empty(), "{} lacks a description", opt.key);
            }
        }
    }

    #[test]
    fn builtin_keys_do_not_collide() {
        let mut seen = HashSet::new();
        for source in BUILTIN_SOURCES {
            for opt in source.options() {
                assert!(seen.insert(opt.key.clone()), "duplicate key {}", opt.key);
            }
        }
    }

    #[test]
    fn dialect_option_is_declared() {
        let table = table::options();
        let dialect = table.iter().find(|o| o.key == SQL_DIALECT_KEY).unwrap();
        assert_eq!(dialect.default_value.as_deref(), Some("default"));
    }

    #[test]
    fn malformed_keys_are_detected() {
        assert!(!ConfigOption::new("", OptionType::String).has_valid_key());
        assert!(!ConfigOption::new("a b", OptionType::String).has_valid_key());
        assert!(ConfigOption::new("a.b", OptionType::String).has_valid_key());
    }

    #[test]
    fn option_json_omits_missing_default() {
        let opt = ConfigOption::new("pipeline.name", OptionType::String).description("Job name.");
        let json = serde_json::to_string(&opt).unwrap();
        assert!(!json.contains("default_value"));
        let back: ConfigOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opt);
    }
}
