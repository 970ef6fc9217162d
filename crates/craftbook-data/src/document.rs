//! Parsed configuration documents and lenient field accessors.
//!
//! Every supported file format is read into the same ordered tree
//! (`serde_yaml::Value`). [`Section`] exposes the forgiving accessors recipe
//! records are written against: absent or mistyped scalars read as `None`
//! or zero instead of failing.

use serde_yaml::{Mapping, Value};

/// Why a parsed tree could not become a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The top level is a list or scalar instead of a mapping.
    #[error("top level must be a mapping of recipe names, found {kind}")]
    NotAMapping { kind: &'static str },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// A parsed config document: an ordered mapping of entry names to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Mapping,
}

impl Document {
    pub fn new(root: Mapping) -> Self {
        Self { root }
    }

    /// Parse a YAML string. An empty string is an empty document.
    pub fn from_yaml(content: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_yaml::from_str(content)?;
        Self::from_value(value)
    }

    /// Wrap a parsed tree. The top level must be a mapping (or empty).
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Mapping(root) => Ok(Self { root }),
            Value::Null => Ok(Self::default()),
            other => Err(DocumentError::NotAMapping {
                kind: kind_name(&other),
            }),
        }
    }

    /// Top-level entries in document order, including ones whose key or
    /// value is unusable.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.root.iter().map(|(key, value)| Entry { key, value })
    }

    pub fn keys(&self) -> Vec<String> {
        self.root.keys().filter_map(key_to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// A borrowed view of one record.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    map: &'a Mapping,
}

impl<'a> Section<'a> {
    pub fn new(map: &'a Mapping) -> Self {
        Self { map }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Any scalar rendered as a string.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// An integer, with floats truncated. Anything else reads as 0.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).and_then(number_as_i64).unwrap_or(0)
    }

    /// A number of either kind, or `None`.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// A sequence of scalars as strings. Non-scalar elements are dropped;
    /// anything other than a sequence reads as empty.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }

    pub fn get_section(&self, key: &str) -> Option<Section<'a>> {
        self.get(key).and_then(Value::as_mapping).map(Section::new)
    }

    /// Keys in document order; non-string scalar keys are stringified.
    pub fn keys(&self) -> Vec<String> {
        self.map.keys().filter_map(key_to_string).collect()
    }
}

/// One top-level entry of a document.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    key: &'a Value,
    value: &'a Value,
}

impl<'a> Entry<'a> {
    /// The entry name, or `None` when the key is a list or mapping.
    pub fn name(&self) -> Option<String> {
        key_to_string(self.key)
    }

    /// The name, or a placeholder such as `<a list>` for composite keys.
    pub fn label(&self) -> String {
        self.name()
            .unwrap_or_else(|| format!("<{}>", kind_name(self.key)))
    }

    /// The entry's record, or `None` when the value is not a mapping.
    pub fn section(&self) -> Option<Section<'a>> {
        self.value.as_mapping().map(Section::new)
    }
}

fn key_to_string(key: &Value) -> Option<String> {
    match key {
        Value::Null => Some("null".to_string()),
        other => scalar_to_string(other),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        _ => None,
    }
}

fn number_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
