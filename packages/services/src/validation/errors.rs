use thiserror::Error;

/// A field name was used that the schema does not declare.
///
/// This is a caller/schema mismatch, not a user-input problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field `{field}`")]
pub struct UnknownFieldError {
    pub field: String,
}

impl UnknownFieldError {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

/// A form definition that cannot be compiled into a schema.
#[derive(Debug, Error)]
pub enum RuleConfigurationError {
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },
    #[error("field `{field}` must match unknown field `{target}`")]
    UnknownMatchTarget { field: String, target: String },
    #[error("field `{field}` has an invalid pattern `{expression}`: {source}")]
    InvalidPattern {
        field: String,
        expression: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure to load a schema from its JSON form.
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("malformed form definition: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Configuration(#[from] RuleConfigurationError),
}
