//! Router configuration via `tablegate.toml`
//!
//! Both settings have defaults, so a missing file and an empty file behave
//! the same. Edit the file and rebuild the router to change them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tablegate_engine::UNNAMED_TABLE_PREFIX;

use crate::{Error, Result};

/// Config file name looked up by embedders.
pub const CONFIG_FILE_NAME: &str = "tablegate.toml";

/// Router configuration loaded from `tablegate.toml`.
///
/// # Example
///
/// ```toml
/// # Parameter key holding the SQL text
/// sql_param_key = "sql"
///
/// # Tables whose name starts with this prefix are hidden from SHOW TABLES
/// unnamed_table_prefix = "UnnamedTable$"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Parameter key consulted when `execute` is called without a key.
    #[serde(default = "default_sql_param_key")]
    pub sql_param_key: String,
    /// Name prefix of anonymous tables filtered out of `SHOW TABLES`.
    #[serde(default = "default_unnamed_table_prefix")]
    pub unnamed_table_prefix: String,
}

fn default_sql_param_key() -> String {
    "sql".to_string()
}

fn default_unnamed_table_prefix() -> String {
    UNNAMED_TABLE_PREFIX.to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            sql_param_key: default_sql_param_key(),
            unnamed_table_prefix: default_unnamed_table_prefix(),
        }
    }
}

impl RouterConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Tablegate router configuration
#
# Parameter key that holds the SQL text when the caller names none (default: "sql")
sql_param_key = "sql"

# Tables whose name starts with this prefix are hidden from SHOW TABLES.
# Anonymous tables registered by the backend use it (default: "UnnamedTable$")
unnamed_table_prefix = "UnnamedTable$"
"#
    }

    /// Parse and validate config text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RouterConfig = toml::from_str(content).map_err(|e| Error::Config {
            reason: format!("Failed to parse router config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config { reason } => Error::Config {
                reason: format!("{} ({})", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Config {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config {
            reason: format!("Failed to serialize router config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Config {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.sql_param_key.trim().is_empty() {
            return Err(Error::Config {
                reason: "sql_param_key must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
