//! Process environment snapshot and environment-name resolution.
//!
//! The process environment is read exactly once into a [`ProcessEnv`] and
//! handed to everything that needs it, so resolution never consults global
//! state after startup.

use std::collections::HashMap;
use std::fmt;

/// Variable selecting the active deployment environment.
pub const ENVIRONMENT_VAR: &str = "PRODUCTS_ENVIRONMENT";

/// Environment used when [`ENVIRONMENT_VAR`] is unset or empty.
pub const DEFAULT_ENVIRONMENT: &str = "Production";

/// Immutable snapshot of process environment variables.
#[derive(Debug, Clone, Default)]
pub struct ProcessEnv {
    vars: HashMap<String, String>,
}

impl ProcessEnv {
    /// Snapshot the current process environment.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Variables whose name starts with `prefix`.
    pub(crate) fn with_prefix(&self, prefix: &str) -> HashMap<String, String> {
        self.vars
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Name of the active deployment environment ("Development", "Production", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentName(String);

impl EnvironmentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Resolve from [`ENVIRONMENT_VAR`], falling back to `"Production"`.
    pub fn resolve(env: &ProcessEnv) -> Self {
        match env.get(ENVIRONMENT_VAR) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Self::new(DEFAULT_ENVIRONMENT),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
