//! Caller-side variable declarations.
//!
//! Responsibilities:
//! - Describe which environment variables a caller wants and how to type them.
//! - Deserialize declarations from any serde format (`type` / `defaultValue`).
//!
//! Does NOT handle:
//! - Checking the type tag or the default (done when the schema is built).
//!
//! Invariants:
//! - Declarations are kept in name order so schema building and issue
//!   reporting are deterministic.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::collections::btree_map;

use super::value::Value;

/// Declaration of one environment variable of interest.
///
/// The type tag is kept as text; unsupported tags are rejected by
/// [`crate::grab_env`] before the environment is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<Value>,
}

impl VariableDeclaration {
    /// Declare a variable with a raw type tag.
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            default_value: None,
        }
    }

    pub fn string() -> Self {
        Self::new("string")
    }

    pub fn number() -> Self {
        Self::new("number")
    }

    pub fn boolean() -> Self {
        Self::new("boolean")
    }

    /// Make the variable optional, substituting `value` when it is absent or empty.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Mapping from variable name to its declaration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Declarations {
    entries: BTreeMap<String, VariableDeclaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any previous one with the same name.
    pub fn with(mut self, name: impl Into<String>, declaration: VariableDeclaration) -> Self {
        self.insert(name, declaration);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        declaration: VariableDeclaration,
    ) -> Option<VariableDeclaration> {
        self.entries.insert(name.into(), declaration)
    }

    pub fn get(&self, name: &str) -> Option<&VariableDeclaration> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, VariableDeclaration> {
        self.entries.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, VariableDeclaration)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, VariableDeclaration)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, declaration)| (name.into(), declaration))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = (&'a String, &'a VariableDeclaration);
    type IntoIter = btree_map::Iter<'a, String, VariableDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
