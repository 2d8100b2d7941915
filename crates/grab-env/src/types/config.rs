//! Validated configuration returned by [`crate::grab_env`].
//!
//! Responsibilities:
//! - Hold the coerced and defaulted value of every declared variable.
//! - Expose typed accessors and conversion into caller-defined structs.
//!
//! Invariants:
//! - Every declared name is present; defaults have already been applied.
//! - `NODE_ENV` is always present and is never stored among the declared values.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use std::collections::BTreeMap;

use super::mode::DeploymentMode;
use super::value::Value;
use crate::constants::NODE_ENV_KEY;

/// Immutable result of a successful validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    values: BTreeMap<String, Value>,
    node_env: DeploymentMode,
}

impl ValidatedConfig {
    pub(crate) fn new(values: BTreeMap<String, Value>, node_env: DeploymentMode) -> Self {
        Self { values, node_env }
    }

    /// The validated deployment mode.
    pub fn node_env(&self) -> DeploymentMode {
        self.node_env
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Value of a `string` variable.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Value of a `number` variable.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Value of a `boolean` variable.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// Number of entries, `NODE_ENV` included.
    pub fn len(&self) -> usize {
        self.values.len() + 1
    }

    /// Always false: `NODE_ENV` is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Declared variables in name order, `NODE_ENV` excluded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Render the configuration, `NODE_ENV` included, as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        // Serializing string keys and primitive values cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Convert into a caller-defined struct whose fields mirror the declared names.
    ///
    /// Integral numbers convert into integer fields; `NODE_ENV` is available
    /// as a `String` or as any type deserializable from its lowercase name.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

impl Serialize for ValidatedConfig {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(NODE_ENV_KEY, &self.node_env)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn sample() -> ValidatedConfig {
        let mut values = BTreeMap::new();
        values.insert("PORT".to_string(), Value::Number(8080.0));
        values.insert("HOST".to_string(), Value::from("localhost"));
        values.insert("DEBUG".to_string(), Value::Boolean(true));
        ValidatedConfig::new(values, DeploymentMode::Production)
    }

    #[test]
    fn test_typed_accessors() {
        let config = sample();
        assert_eq!(config.number("PORT"), Some(8080.0));
        assert_eq!(config.string("HOST"), Some("localhost"));
        assert_eq!(config.boolean("DEBUG"), Some(true));
        // Wrong accessor for the stored type yields None.
        assert_eq!(config.string("PORT"), None);
        assert_eq!(config.node_env(), DeploymentMode::Production);
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_to_json_includes_node_env() {
        let json = sample().to_json();
        assert_eq!(
            json,
            serde_json::json!({
                "DEBUG": true,
                "HOST": "localhost",
                "PORT": 8080,
                "NODE_ENV": "production"
            })
        );
    }

    #[test]
    fn test_deserialize_into_struct() {
        #[derive(Debug, Deserialize)]
        #[allow(non_snake_case)]
        struct AppEnv {
            PORT: u16,
            HOST: String,
            DEBUG: bool,
            NODE_ENV: String,
        }

        let env: AppEnv = sample().deserialize().unwrap();
        assert_eq!(env.PORT, 8080);
        assert_eq!(env.HOST, "localhost");
        assert!(env.DEBUG);
        assert_eq!(env.NODE_ENV, "production");
    }
}
