//! Entry points for validating the environment against declarations.

use crate::env::EnvSnapshot;
use crate::error::GrabEnvError;
use crate::schema::Schema;
use crate::types::{Declarations, ValidatedConfig};

/// Validate the current process environment against `declarations`.
///
/// Declaration mistakes are reported before the environment is read. On a
/// validation failure the error carries one issue per failing variable.
///
/// # Examples
///
/// ```
/// use grab_env::{Declarations, VariableDeclaration, grab_env};
///
/// let declarations = Declarations::new()
///     .with("_GRAB_ENV_DOC_PORT", VariableDeclaration::number().with_default(8080));
/// let config = grab_env(&declarations).unwrap();
/// assert_eq!(config.number("_GRAB_ENV_DOC_PORT"), Some(8080.0));
/// ```
pub fn grab_env(declarations: &Declarations) -> Result<ValidatedConfig, GrabEnvError> {
    let schema = Schema::build(declarations)?;
    Ok(schema.validate(&EnvSnapshot::from_process())?)
}

/// Validate an explicit environment snapshot against `declarations`.
pub fn grab_env_from(
    declarations: &Declarations,
    env: &EnvSnapshot,
) -> Result<ValidatedConfig, GrabEnvError> {
    let schema = Schema::build(declarations)?;
    Ok(schema.validate(env)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeploymentMode, VariableDeclaration};
    use serial_test::serial;

    fn port_declarations() -> Declarations {
        Declarations::new().with("PORT", VariableDeclaration::number())
    }

    #[test]
    fn test_number_is_coerced_and_node_env_defaults() {
        let env: EnvSnapshot = [("PORT", "8080")].into_iter().collect();
        let config = grab_env_from(&port_declarations(), &env).unwrap();

        assert_eq!(config.number("PORT"), Some(8080.0));
        assert_eq!(config.node_env(), DeploymentMode::Development);
        assert_eq!(
            config.to_json(),
            serde_json::json!({ "PORT": 8080, "NODE_ENV": "development" })
        );
    }

    #[test]
    fn test_missing_required_yields_single_issue() {
        let err = grab_env_from(&port_declarations(), &EnvSnapshot::default()).unwrap_err();
        match err {
            GrabEnvError::Validation(validation) => {
                assert_eq!(validation.issues().len(), 1);
                assert_eq!(validation.issues()[0].environment, "PORT");
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_declaration_error_precedes_environment() {
        let declarations = port_declarations().with("WHEN", VariableDeclaration::new("date"));
        // PORT is missing too, but the declaration mistake wins.
        let err = grab_env_from(&declarations, &EnvSnapshot::default()).unwrap_err();
        assert!(matches!(err, GrabEnvError::InvalidType { ref field, .. } if field == "WHEN"));
    }

    #[test]
    #[serial]
    fn test_grab_env_reads_process_environment() {
        let declarations = Declarations::new()
            .with("_GRAB_ENV_TEST_HOST", VariableDeclaration::string())
            .with("_GRAB_ENV_TEST_DEBUG", VariableDeclaration::boolean());

        temp_env::with_vars(
            [
                ("_GRAB_ENV_TEST_HOST", Some("example.internal")),
                ("_GRAB_ENV_TEST_DEBUG", Some("yes")),
                ("NODE_ENV", Some("production")),
            ],
            || {
                let config = grab_env(&declarations).unwrap();
                assert_eq!(config.string("_GRAB_ENV_TEST_HOST"), Some("example.internal"));
                assert_eq!(config.boolean("_GRAB_ENV_TEST_DEBUG"), Some(true));
                assert_eq!(config.node_env(), DeploymentMode::Production);
            },
        );
    }
}
