//! Variable context shared by a render call tree

use std::collections::BTreeMap;

use super::value::Value;
use crate::error::{Result, RyujiError};

/// Mutable name → value mapping a template renders against
///
/// One context is borrowed mutably for a whole render, including every nested
/// component. `for` bindings are written into it and outlive their loop:
/// after `[[ for:posts:post ]] ... [[ endfor ]]` the name `post` still holds the
/// last element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    vars: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        match Value::from(json) {
            Value::Mapping(vars) => Ok(Self { vars }),
            _ => Err(RyujiError::ContextInvalid(
                "top-level JSON value must be an object".to_string(),
            )),
        }
    }

    /// Parse JSON text into a context
    pub fn from_json_str(text: &str) -> Result<Self> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json(json)
    }

    /// Build a context from a TOML table
    pub fn from_toml(data: toml::Value) -> Result<Self> {
        match Value::from(data) {
            Value::Mapping(vars) => Ok(Self { vars }),
            _ => Err(RyujiError::ContextInvalid(
                "top-level TOML value must be a table".to_string(),
            )),
        }
    }

    /// Parse TOML text into a context
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| RyujiError::ContextInvalid(e.to_string()))?;
        Self::from_toml(toml::Value::Table(table))
    }

    /// Bind a top-level name, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    /// Top-level lookup (no dotted access)
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Dotted lookup: `user.name`, `items.0`
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.vars.get(first)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Iterate over top-level bindings in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.vars.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
