pub mod setup;

pub use models;
pub use services;

pub use models::{FieldSchema, FormDefinition, Rule, RuleKind, TouchedSet, ValidationResult, ValuesMap};
pub use services::{
    is_submittable, validate_all, validate_field, FormSchema, FormSession, RuleConfigurationError,
    SchemaLoadError, SubmitHandler, SubmitOutcome, ThemeMode, ThemeState, UnknownFieldError,
};
pub use setup::{init_tracing, TracingConfig};
