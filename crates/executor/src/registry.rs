//! Registry of configuration keys accepted by `SET`.
//!
//! Built once by folding a list of [`OptionSource`]s, immutable afterwards.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;
use tablegate_core::{ConfigOption, OptionSource, BUILTIN_SOURCES};
use tracing::{debug, warn};

// =============================================================================
// Process-wide Registry
// =============================================================================
//
// Built lazily from the built-in sources on first use and never torn down.
// Routers share it through an `Arc` unless given their own registry.

static GLOBAL_REGISTRY: Lazy<Arc<OptionRegistry>> =
    Lazy::new(|| Arc::new(OptionRegistry::build(&BUILTIN_SOURCES)));

/// Immutable mapping from option key to its declaration.
#[derive(Debug, Clone, Default)]
pub struct OptionRegistry {
    entries: BTreeMap<String, ConfigOption>,
}

impl OptionRegistry {
    /// Fold the sources in order into one registry.
    ///
    /// A key declared by several sources keeps the last declaration. Entries
    /// with an empty key or a key containing whitespace are skipped with a
    /// warning; they never fail the build.
    pub fn build(sources: &[OptionSource]) -> Self {
        let mut entries = BTreeMap::new();
        for source in sources {
            for option in source.options() {
                if !option.has_valid_key() {
                    warn!(
                        source = source.name(),
                        key = %option.key,
                        "skipping malformed option declaration"
                    );
                    continue;
                }
                entries.insert(option.key.clone(), option);
            }
        }
        debug!(options = entries.len(), sources = sources.len(), "option registry built");
        Self { entries }
    }

    /// Registry built from the four built-in sources.
    pub fn builtin() -> Self {
        Self::build(&BUILTIN_SOURCES)
    }

    /// Shared process-wide built-in registry.
    pub fn global() -> Arc<OptionRegistry> {
        Arc::clone(&GLOBAL_REGISTRY)
    }

    /// Declaration for `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<&ConfigOption> {
        self.entries.get(key)
    }

    /// Whether `key` is a declared option.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no option is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
