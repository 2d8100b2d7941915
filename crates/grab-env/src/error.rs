//! Error types for schema building and validation.
//!
//! Responsibilities:
//! - Distinguish declaration mistakes (bad type tag, bad default) from
//!   environment data that fails validation.
//! - Carry the full set of per-variable issues for a failed validation pass.
//!
//! Does NOT handle:
//! - Dotfile loading failures (see `loader::EnvFileError`).
//!
//! Invariants:
//! - A `ValidationError` is never empty; it holds one issue per failing variable.
//! - Messages never include raw environment values, only variable names.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::constants::SUPPORTED_TYPE_TAGS;
use crate::schema::VarType;

/// Failure reasons recorded for one environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Name of the offending variable.
    pub environment: String,
    /// Messages in the order they were produced.
    pub errors: Vec<String>,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.environment, self.errors.join(", "))
    }
}

/// Aggregated result of a failed validation pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Issue recorded for `name`, if that variable failed.
    pub fn issue(&self, name: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.environment == name)
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// Errors returned by [`crate::grab_env`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrabEnvError {
    /// A declaration used a type tag outside the supported set.
    #[error("Invalid type for {field}: {} (got \"{found}\")", expected_type_tags())]
    InvalidType { field: String, found: String },

    /// A declaration's default does not match its declared type.
    #[error("Invalid default for {field}: expected a {expected} value, got a {found} value")]
    InvalidDefault {
        field: String,
        expected: VarType,
        found: VarType,
    },

    /// One or more variables failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GrabEnvError {
    /// The error expressed as per-variable issues.
    ///
    /// Declaration errors produce a single issue naming the offending field.
    pub fn issues(&self) -> Vec<ValidationIssue> {
        match self {
            GrabEnvError::InvalidType { field, .. } => vec![ValidationIssue {
                environment: field.clone(),
                errors: vec![expected_type_tags()],
            }],
            GrabEnvError::InvalidDefault {
                field, expected, ..
            } => vec![ValidationIssue {
                environment: field.clone(),
                errors: vec![format!("Expected a {} default value", expected)],
            }],
            GrabEnvError::Validation(error) => error.issues().to_vec(),
        }
    }

    /// True for mistakes in the declarations rather than in the environment.
    pub fn is_declaration_error(&self) -> bool {
        !matches!(self, GrabEnvError::Validation(_))
    }
}

/// `Expected one of: "string", "number", "boolean"`.
fn expected_type_tags() -> String {
    let tags = SUPPORTED_TYPE_TAGS
        .iter()
        .map(|tag| format!("\"{}\"", tag))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Expected one of: {}", tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_type_message_lists_supported_tags() {
        let err = GrabEnvError::InvalidType {
            field: "WHEN".to_string(),
            found: "date".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Invalid type for WHEN: Expected one of: "string", "number", "boolean" (got "date")"#
        );
        assert!(err.is_declaration_error());

        let issues = err.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].environment, "WHEN");
        assert_eq!(
            issues[0].errors,
            vec![r#"Expected one of: "string", "number", "boolean""#.to_string()]
        );
    }

    #[test]
    fn test_validation_error_display_lists_every_issue() {
        let err = ValidationError::new(vec![
            ValidationIssue {
                environment: "HOST".to_string(),
                errors: vec!["Required".to_string()],
            },
            ValidationIssue {
                environment: "PORT".to_string(),
                errors: vec!["Expected number, received non-numeric value".to_string()],
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Validation failed: HOST: Required; PORT: Expected number, received non-numeric value"
        );
        assert!(err.issue("PORT").is_some());
        assert!(err.issue("MISSING").is_none());

        let wrapped = GrabEnvError::from(err);
        assert!(!wrapped.is_declaration_error());
        assert_eq!(wrapped.issues().len(), 2);
    }
}
