//! Environment overrides.
//!
//! Lookups go through [`EnvSource`] so tests can supply a map instead of
//! touching the process environment.

use std::collections::HashMap;

/// Source of environment-style key/value overrides.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for HashMap<&str, &str> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Outcome of reading one numeric override.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    /// Key not set.
    Absent,
    /// Key set and parsed.
    Value(f64),
    /// Key set but not a number; the raw text is kept for the warning.
    Unparseable(String),
}

pub fn read_override(env: &dyn EnvSource, key: &str) -> Override {
    match env.var(key) {
        None => Override::Absent,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(v) => Override::Value(v),
            Err(_) => Override::Unparseable(raw),
        },
    }
}
