//! Validation schema built from caller declarations.
//!
//! Responsibilities:
//! - Turn `Declarations` into typed fields, rejecting unsupported type tags and
//!   mistyped defaults before any environment value is read.
//! - Validate an `EnvSnapshot` against every field in a single pass.
//! - Resolve the fixed `NODE_ENV` field.
//!
//! Does NOT handle:
//! - Reading the process environment (see `env.rs`).
//! - Loading dotfiles (see `loader` module).
//!
//! Invariants:
//! - Validation never short-circuits: every failing field yields an issue.
//! - `NODE_ENV` never fails; absent, empty, or unrecognized values resolve to
//!   `development`.
//! - A declaration named `NODE_ENV` is superseded by the fixed field.

mod coerce;

pub use coerce::VarType;

use std::collections::BTreeMap;

use crate::constants::{NODE_ENV_KEY, REQUIRED_MESSAGE};
use crate::env::EnvSnapshot;
use crate::error::{GrabEnvError, ValidationError, ValidationIssue};
use crate::types::{Declarations, DeploymentMode, ValidatedConfig, Value};

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    var_type: VarType,
    default: Option<Value>,
}

impl Field {
    /// Coerce the raw value, substituting the default when absent or empty.
    fn resolve(&self, raw: Option<&str>) -> Result<Value, Vec<String>> {
        match (raw, &self.default) {
            (None | Some(""), Some(default)) => Ok(default.clone()),
            (None, None) => Err(vec![REQUIRED_MESSAGE.to_string()]),
            (Some(""), None) if self.var_type != VarType::String => {
                Err(vec![REQUIRED_MESSAGE.to_string()])
            }
            (Some(raw), _) => self.var_type.coerce(raw).map_err(|message| vec![message]),
        }
    }
}

/// Typed fields assembled from a set of declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Build a schema, failing on the first declaration mistake in name order.
    pub fn build(declarations: &Declarations) -> Result<Self, GrabEnvError> {
        let mut fields = Vec::with_capacity(declarations.len());

        for (name, declaration) in declarations {
            if name == NODE_ENV_KEY {
                tracing::debug!("NODE_ENV declaration replaced by the built-in field");
                continue;
            }

            let var_type: VarType = declaration.type_tag.parse().map_err(|()| {
                GrabEnvError::InvalidType {
                    field: name.clone(),
                    found: declaration.type_tag.clone(),
                }
            })?;

            if let Some(default) = &declaration.default_value
                && default.var_type() != var_type
            {
                return Err(GrabEnvError::InvalidDefault {
                    field: name.clone(),
                    expected: var_type,
                    found: default.var_type(),
                });
            }

            fields.push(Field {
                name: name.clone(),
                var_type,
                default: declaration.default_value.clone(),
            });
        }

        tracing::debug!(fields = fields.len(), "Built environment schema");
        Ok(Self { fields })
    }

    /// Names of the declared fields, `NODE_ENV` excluded.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Validate `env` against every field, aggregating all failures.
    pub fn validate(&self, env: &EnvSnapshot) -> Result<ValidatedConfig, ValidationError> {
        let mut values = BTreeMap::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            match field.resolve(env.get(&field.name)) {
                Ok(value) => {
                    values.insert(field.name.clone(), value);
                }
                Err(errors) => issues.push(ValidationIssue {
                    environment: field.name.clone(),
                    errors,
                }),
            }
        }

        if !issues.is_empty() {
            return Err(ValidationError::new(issues));
        }

        Ok(ValidatedConfig::new(
            values,
            resolve_node_env(env.get(NODE_ENV_KEY)),
        ))
    }
}

fn resolve_node_env(raw: Option<&str>) -> DeploymentMode {
    match raw.map(str::trim) {
        None | Some("") => DeploymentMode::default(),
        Some(raw) => DeploymentMode::from_env_value(raw).unwrap_or_else(|| {
            tracing::warn!(
                "Unrecognized NODE_ENV, using {}",
                DeploymentMode::default()
            );
            DeploymentMode::default()
        }),
    }
}
