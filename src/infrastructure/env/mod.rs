//! Environment variable lookups with a default fallback.
//!
//! Reads go through [`EnvReader`] so configuration code can be handed an in-memory
//! table in tests instead of touching the real process environment.

use std::collections::HashMap;

pub trait EnvReader: Send + Sync {
    /// Value of `key`, or `None` when it is not set. A variable set to the empty
    /// string is present.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `default` when it is not set.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }
}

/// Process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvReader for SystemEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        // Non-Unicode values are still set; keep them rather than reporting absence.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed in-memory variable table.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvReader for MapEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Read `key` from the process environment, falling back to `default` when unset.
pub fn getenv(key: &str, default: &str) -> String {
    SystemEnv.get_or(key, default)
}
