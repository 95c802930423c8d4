pub mod field;
pub mod form;
pub mod result;
pub mod rule;
pub mod values;

pub use field::FieldSchema;
pub use form::FormDefinition;
pub use result::{ValidationErrors, ValidationResult};
pub use rule::{Rule, RuleKind};
pub use values::{TouchedSet, ValuesMap};
