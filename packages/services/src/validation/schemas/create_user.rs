use models::{FieldSchema, FormDefinition, Rule};

use crate::validation::{FormSchema, RuleConfigurationError};

/// Ten ASCII digits, nothing else
pub const PHONE_PATTERN: &str = "[0-9]{10}";

/// Characters a password may consist of, at least eight of them
pub const PASSWORD_PATTERN: &str = "[A-Za-z0-9!@#$%^&*]{8,}";

/// A password must contain a letter, a digit and a special character
pub const PASSWORD_MUST_CONTAIN: [&str; 3] = ["[A-Za-z]", "[0-9]", "[!@#$%^&*]"];

pub const PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters long and include letters, numbers, and special characters.";

/// The password policy as a single pattern rule
pub fn password_rule() -> Rule {
    Rule::pattern_containing(PASSWORD_PATTERN, PASSWORD_MUST_CONTAIN, PASSWORD_MESSAGE)
}

/// Fields of the "create user" form, in display order.
pub fn create_user_definition() -> FormDefinition {
    FormDefinition::new()
        .field(FieldSchema::new("firstName").required("required"))
        .field(FieldSchema::new("lastName").required("required"))
        .field(
            FieldSchema::new("email")
                .required("Email is required")
                .email("Invalid email address"),
        )
        .field(
            FieldSchema::new("password")
                .required("required")
                .rule(password_rule()),
        )
        .field(
            FieldSchema::new("confirmPassword")
                .required("Confirm password is required")
                .matches_field("password", "Passwords must match"),
        )
        .field(
            FieldSchema::new("contact")
                .required("required")
                .pattern(PHONE_PATTERN, "Phone no is not valid"),
        )
        .field(FieldSchema::new("address").required("required"))
}

pub fn create_user_schema() -> Result<FormSchema, RuleConfigurationError> {
    FormSchema::new(create_user_definition())
}
