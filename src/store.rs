use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Read-only key-value source of CORS policy values, addressed by dotted keys
/// such as `Cors.AllowOrigin`.
pub trait PolicyStore {
    fn read(&self, key: &str) -> Option<Value>;
}

/// Errors raised while building a store from a JSON document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read policy file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse policy document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Dotted keys walk nested objects. A top-level entry holding the literal
/// dotted key is consulted first.
impl PolicyStore for Value {
    fn read(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.get(key) {
            return Some(value.clone());
        }

        let mut current = self;
        for segment in key.split('.') {
            current = current.get(segment)?;
        }
        Some(current.clone())
    }
}

impl PolicyStore for HashMap<String, Value> {
    fn read(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl PolicyStore for BTreeMap<String, Value> {
    fn read(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }
}

impl<T: PolicyStore + ?Sized> PolicyStore for &T {
    fn read(&self, key: &str) -> Option<Value> {
        (**self).read(key)
    }
}

impl<T: PolicyStore + ?Sized> PolicyStore for Arc<T> {
    fn read(&self, key: &str) -> Option<Value> {
        (**self).read(key)
    }
}

/// Store backed by a parsed JSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonPolicyStore {
    document: Value,
}

impl JsonPolicyStore {
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    pub fn from_json_str(source: &str) -> Result<Self, StoreError> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&source)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl PolicyStore for JsonPolicyStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.document.read(key)
    }
}

/// Loose truthiness: null, `false`, zero, `""`, `"0"` and empty collections are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Casts a value to a list: null is empty, collections yield their elements and
/// any scalar becomes a one-element list.
pub(crate) fn to_list(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(scalar_to_string).collect(),
        Value::Object(map) => map.values().map(scalar_to_string).collect(),
        scalar => vec![scalar_to_string(scalar)],
    }
}

pub(crate) fn is_list_like(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
