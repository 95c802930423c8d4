use models::{TouchedSet, ValidationResult, ValuesMap};

use crate::validation::{is_submittable, validate_all, validate_field, FormSchema, UnknownFieldError};

/// Receives the values of a form that passed validation.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &ValuesMap);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The handler was called with the values
    Submitted,
    /// The form was invalid; every field is now touched
    Rejected(ValidationResult),
}

/// Input state of one form: current values, which fields were touched, and
/// how often a submit was attempted.
///
/// Validity is always recomputed from the values; touched state only decides
/// which errors are shown.
#[derive(Debug, Clone)]
pub struct FormSession<'a> {
    schema: &'a FormSchema,
    values: ValuesMap,
    touched: TouchedSet,
    submit_count: usize,
}

impl<'a> FormSession<'a> {
    pub fn new(schema: &'a FormSchema) -> Self {
        Self {
            schema,
            values: initial_values(schema),
            touched: TouchedSet::new(),
            submit_count: 0,
        }
    }

    pub fn values(&self) -> &ValuesMap {
        &self.values
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    pub fn change(&mut self, field: &str, value: impl Into<String>) -> Result<(), UnknownFieldError> {
        self.ensure_known(field)?;
        self.values.set(field, value);
        Ok(())
    }

    pub fn blur(&mut self, field: &str) -> Result<(), UnknownFieldError> {
        self.ensure_known(field)?;
        self.touched.touch(field);
        Ok(())
    }

    pub fn validate(&self) -> ValidationResult {
        validate_all(self.schema, &self.values)
    }

    /// Messages to display for a field: its failures if it was touched,
    /// nothing otherwise.
    pub fn visible_errors(&self, field: &str) -> Result<Vec<String>, UnknownFieldError> {
        let messages = validate_field(self.schema, &self.values, field)?;
        if self.touched.is_touched(field) {
            Ok(messages)
        } else {
            Ok(Vec::new())
        }
    }

    /// Validate the whole form and hand the values to `handler` if it is
    /// submittable. An invalid form marks every field touched instead.
    pub fn submit<H: SubmitHandler + ?Sized>(&mut self, handler: &mut H) -> SubmitOutcome {
        self.submit_count += 1;
        let result = self.validate();
        if is_submittable(&result) {
            tracing::info!(attempt = self.submit_count, "form submitted");
            handler.on_submit(&self.values);
            SubmitOutcome::Submitted
        } else {
            self.touched.extend(self.schema.field_names());
            tracing::info!(
                attempt = self.submit_count,
                invalid_fields = result.invalid_fields().count(),
                "form submission rejected"
            );
            SubmitOutcome::Rejected(result)
        }
    }

    /// Back to initial values with nothing touched.
    pub fn reset(&mut self) {
        self.values = initial_values(self.schema);
        self.touched.clear();
        self.submit_count = 0;
    }

    fn ensure_known(&self, field: &str) -> Result<(), UnknownFieldError> {
        if self.schema.contains(field) {
            Ok(())
        } else {
            tracing::warn!(field = %field, "form input for unknown field");
            Err(UnknownFieldError::new(field))
        }
    }
}

fn initial_values(schema: &FormSchema) -> ValuesMap {
    schema.field_names().map(|name| (name, "")).collect()
}
