use models::{FieldSchema, FormDefinition, ValuesMap};

use crate::form::FormSession;
use crate::validation::schemas::create_user::password_rule;
use crate::validation::FormSchema;

/// firstName, email, password, confirmPassword
pub fn signup_schema() -> FormSchema {
    FormSchema::new(
        FormDefinition::new()
            .field(FieldSchema::new("firstName").required("required"))
            .field(
                FieldSchema::new("email")
                    .required("Email is required")
                    .email("Invalid email address"),
            )
            .field(FieldSchema::new("password").required("required").rule(password_rule()))
            .field(
                FieldSchema::new("confirmPassword")
                    .required("Confirm password is required")
                    .matches_field("password", "Passwords must match"),
            ),
    )
    .expect("signup schema is valid")
}

pub fn contact_schema() -> FormSchema {
    FormSchema::new(
        FormDefinition::new().field(
            FieldSchema::new("contact")
                .required("required")
                .pattern("^[0-9]{10}$", "Phone no is not valid"),
        ),
    )
    .expect("contact schema is valid")
}

pub fn valid_signup_values() -> ValuesMap {
    ValuesMap::new()
        .with("firstName", "Ann")
        .with("email", "ann@x.com")
        .with("password", "Abc123!@")
        .with("confirmPassword", "Abc123!@")
}

/// Type every value into the session and blur nothing.
pub fn fill(session: &mut FormSession<'_>, values: &ValuesMap) {
    for (field, value) in values.iter() {
        session
            .change(field, value)
            .expect("test values only use schema fields");
    }
}
