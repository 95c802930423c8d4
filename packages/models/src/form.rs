use serde::{Deserialize, Serialize};

use crate::field::FieldSchema;

/// An unchecked, serializable description of a form.
///
/// Nothing here guarantees the schema invariants (unique names, resolvable
/// `matchesField` targets, parseable patterns); compiling the definition into
/// a schema does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub fields: Vec<FieldSchema>,
}

impl FormDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
