//! Coercion rules for the supported primitive types.
//!
//! Invariants:
//! - Coercion is a pure function of the raw text.
//! - Failure messages never echo the raw value.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::types::Value;

/// Primitive type a declared variable is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    String,
    Number,
    Boolean,
}

const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];
const FALSY: [&str; 4] = ["false", "0", "no", "off"];

impl VarType {
    /// The type tag used in declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::String => "string",
            VarType::Number => "number",
            VarType::Boolean => "boolean",
        }
    }

    /// Coerce raw environment text to this type.
    pub fn coerce(self, raw: &str) -> Result<Value, String> {
        match self {
            VarType::String => Ok(Value::String(raw.to_string())),
            VarType::Number => coerce_number(raw),
            VarType::Boolean => coerce_boolean(raw),
        }
    }
}

fn coerce_number(raw: &str) -> Result<Value, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Value::Number(n)),
        _ => Err("Expected number, received non-numeric value".to_string()),
    }
}

fn coerce_boolean(raw: &str) -> Result<Value, String> {
    let normalized = raw.trim().to_ascii_lowercase();
    if TRUTHY.contains(&normalized.as_str()) {
        Ok(Value::Boolean(true))
    } else if FALSY.contains(&normalized.as_str()) {
        Ok(Value::Boolean(false))
    } else {
        Err(
            "Expected boolean (true/false, 1/0, yes/no, on/off), received unrecognized value"
                .to_string(),
        )
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VarType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(VarType::String),
            "number" => Ok(VarType::Number),
            "boolean" => Ok(VarType::Boolean),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(
            VarType::String.coerce("  spaced  "),
            Ok(Value::String("  spaced  ".to_string()))
        );
        assert_eq!(VarType::String.coerce(""), Ok(Value::String(String::new())));
    }

    #[test]
    fn test_number_parses_integers_and_floats() {
        assert_eq!(VarType::Number.coerce("8080"), Ok(Value::Number(8080.0)));
        assert_eq!(VarType::Number.coerce(" -1.5 "), Ok(Value::Number(-1.5)));
        assert_eq!(VarType::Number.coerce("1e3"), Ok(Value::Number(1000.0)));
    }

    #[test]
    fn test_number_rejects_non_numeric_and_non_finite() {
        for raw in ["abc", "12px", "", "NaN", "inf", "-infinity"] {
            let err = VarType::Number.coerce(raw).unwrap_err();
            assert!(err.starts_with("Expected number"), "{raw}: {err}");
        }
    }

    #[test]
    fn test_boolean_recognized_forms() {
        for raw in ["true", "TRUE", "1", "yes", "On", " true "] {
            assert_eq!(VarType::Boolean.coerce(raw), Ok(Value::Boolean(true)), "{raw}");
        }
        for raw in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(
                VarType::Boolean.coerce(raw),
                Ok(Value::Boolean(false)),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_boolean_rejects_other_text() {
        for raw in ["maybe", "2", "", "truthy"] {
            assert!(VarType::Boolean.coerce(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_tag_parsing() {
        assert_eq!("number".parse::<VarType>(), Ok(VarType::Number));
        assert!("Number".parse::<VarType>().is_err());
        assert!("date".parse::<VarType>().is_err());
    }
}
