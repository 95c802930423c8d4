use std::collections::HashMap;

use serde::Serialize;

/// A mapping of field names to their validation error messages
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Outcome of validating a whole form.
///
/// Fields appear in schema order, each with the messages of its failing rules
/// in declaration order. An empty list means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    fields: Vec<(String, Vec<String>)>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for one field
    pub fn push_field(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.fields.push((field.into(), messages));
    }

    /// Messages for a field, or `None` if the field was not validated
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// `true` iff every field's message list is empty
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, messages)| messages.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Only the fields that have at least one failure
    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(name, _)| name)
    }

    /// Number of failure messages across all fields
    pub fn error_count(&self) -> usize {
        self.fields.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Drop valid fields and key the rest by name
    pub fn into_errors(self) -> ValidationErrors {
        self.fields
            .into_iter()
            .filter(|(_, messages)| !messages.is_empty())
            .collect()
    }

}
