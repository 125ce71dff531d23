//! Form data container and element type descriptor.

use indexmap::IndexMap;

/// Ordered multi-valued form data: each key maps to one or more optional
/// values. `None` means "key present, no value" and serializes as a bare key.
///
/// Keys keep insertion order, values keep push order; the writer only reads
/// this, so output is deterministic for a given construction sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: IndexMap<String, Vec<Option<String>>>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(Some(value.into()));
    }

    /// Append a bare key (no value).
    pub fn add_bare(&mut self, key: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(None);
    }

    /// Replace all values under `key` with the single given value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![Some(value.into())]);
    }

    /// Values under `key`, in push order.
    pub fn get(&self, key: &str) -> Option<&[Option<String>]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All (key, value) pairs flattened in output order: keys in insertion
    /// order, each key's values in push order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_deref()))
        })
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declared type of the element a dispatcher wants written, as a tag rather
/// than runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// A string-keyed multi-valued map. The tag carries what the declaration
    /// says about the value type; `None` means the generics are erased.
    MultiMap { values: Option<ValueTag> },
    /// Anything else.
    Other,
}

/// Declared value type of a multi-valued map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTag {
    String,
    Opaque,
}

impl ElementType {
    /// A multi-map statically declared to hold string values.
    pub fn string_multi_map() -> Self {
        ElementType::MultiMap {
            values: Some(ValueTag::String),
        }
    }

    /// A multi-map with erased value generics.
    pub fn untyped_multi_map() -> Self {
        ElementType::MultiMap { values: None }
    }
}
