use models::{ValidationResult, ValuesMap};

use super::errors::UnknownFieldError;
use super::schema::{CompiledField, FormSchema};

/// Validate a single field.
///
/// Every rule is evaluated in declaration order and the messages of all
/// failing rules are returned, so one field can report several problems.
pub fn validate_field(
    schema: &FormSchema,
    values: &ValuesMap,
    field_name: &str,
) -> Result<Vec<String>, UnknownFieldError> {
    let field = schema.field(field_name).inspect_err(|e| {
        tracing::warn!(field = %e.field, "validation requested for unknown field");
    })?;
    Ok(failures(field, values))
}

/// Validate every field of the schema, in schema order.
pub fn validate_all(schema: &FormSchema, values: &ValuesMap) -> ValidationResult {
    let mut result = ValidationResult::new();
    for field in schema.fields() {
        result.push_field(field.name.clone(), failures(field, values));
    }
    tracing::debug!(
        fields = schema.len(),
        errors = result.error_count(),
        "form validated"
    );
    result
}

/// Whether a form with this result may be submitted.
pub fn is_submittable(result: &ValidationResult) -> bool {
    result.is_valid()
}

fn failures(field: &CompiledField, values: &ValuesMap) -> Vec<String> {
    let value = values.get(&field.name);
    field
        .rules
        .iter()
        .filter(|rule| !rule.evaluator.passes(value, values))
        .map(|rule| rule.message.clone())
        .collect()
}
