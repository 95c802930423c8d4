pub mod engine;
pub mod errors;
mod rules;
pub mod schema;
pub mod schemas;

// Re-export common types and functions
pub use engine::{is_submittable, validate_all, validate_field};
pub use errors::{RuleConfigurationError, SchemaLoadError, UnknownFieldError};
pub use schema::FormSchema;
