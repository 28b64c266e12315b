//! Caller parameters.
//!
//! A flat key/value map. The router looks the SQL text up in it under the
//! configured parameter key.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Key/value parameters passed to [`Router::execute`](crate::Router::execute).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    /// Value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse command-line style arguments.
    ///
    /// Accepts `--key value` and `-key value`. A key followed by another key
    /// or by the end of the arguments gets an empty value. A token that looks
    /// like a negative number (`-1`, `-0.5`) is a value, never a key.
    ///
    /// ```
    /// use tablegate_executor::Params;
    ///
    /// let params = Params::from_args(["--sql", "SHOW TABLES", "--verbose"]).unwrap();
    /// assert_eq!(params.get("sql"), Some("SHOW TABLES"));
    /// assert_eq!(params.get("verbose"), Some(""));
    /// ```
    ///
    /// # Errors
    ///
    /// A value with no preceding key, or a bare `-`/`--`, is invalid input.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Params::new();
        let mut pending: Option<String> = None;

        for arg in args {
            let arg = arg.as_ref();
            match key_of(arg) {
                Some("") => {
                    return Err(Error::InvalidInput {
                        reason: format!("argument '{}' has an empty key", arg),
                    })
                }
                Some(key) => {
                    if let Some(previous) = pending.replace(key.to_string()) {
                        params.insert(previous, "");
                    }
                }
                None => match pending.take() {
                    Some(key) => {
                        params.insert(key, arg);
                    }
                    None => {
                        return Err(Error::InvalidInput {
                            reason: format!("value '{}' is not preceded by a key", arg),
                        })
                    }
                },
            }
        }
        if let Some(key) = pending {
            params.insert(key, "");
        }
        Ok(params)
    }
}

fn key_of(arg: &str) -> Option<&str> {
    let stripped = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    let numeric = stripped.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && stripped.parse::<f64>().is_ok();
    if numeric {
        return None;
    }
    Some(stripped)
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}
