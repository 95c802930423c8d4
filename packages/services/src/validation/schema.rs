use std::collections::HashMap;

use models::{FormDefinition, Rule, RuleKind};

use super::errors::{RuleConfigurationError, SchemaLoadError, UnknownFieldError};
use super::rules::{CompiledRule, Evaluator};

/// Message of the `required` rule added for fields that are only flagged
pub const DEFAULT_REQUIRED_MESSAGE: &str = "required";

#[derive(Debug, Clone)]
pub(crate) struct CompiledField {
    pub name: String,
    pub required: bool,
    pub rules: Vec<CompiledRule>,
}

/// An immutable, checked form schema.
///
/// Built once from a [`FormDefinition`]: field names are unique, every
/// `matchesField` target exists and every pattern compiles.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<CompiledField>,
    index: HashMap<String, usize>,
}

impl FormSchema {
    pub fn new(definition: FormDefinition) -> Result<Self, RuleConfigurationError> {
        let mut index = HashMap::with_capacity(definition.fields.len());
        for (position, field) in definition.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(RuleConfigurationError::EmptyFieldName);
            }
            if index.insert(field.name.clone(), position).is_some() {
                return Err(RuleConfigurationError::DuplicateField {
                    field: field.name.clone(),
                });
            }
        }

        let mut fields = Vec::with_capacity(definition.fields.len());
        for mut field in definition.fields {
            let required = field.is_required();
            if required && !field.has_required_rule() {
                field.rules.insert(0, Rule::required(DEFAULT_REQUIRED_MESSAGE));
            }
            let mut rules = Vec::with_capacity(field.rules.len());
            for rule in field.rules {
                if let RuleKind::MatchesField { field: target } = &rule.kind {
                    if !index.contains_key(target) {
                        return Err(RuleConfigurationError::UnknownMatchTarget {
                            field: field.name,
                            target: target.clone(),
                        });
                    }
                }
                rules.push(CompiledRule {
                    evaluator: Evaluator::compile(&field.name, &rule.kind)?,
                    message: rule.message,
                });
            }
            fields.push(CompiledField {
                name: field.name,
                required,
                rules,
            });
        }

        tracing::debug!(fields = fields.len(), "form schema compiled");
        Ok(Self { fields, index })
    }

    /// Parse a JSON form definition and compile it.
    pub fn from_json(json: &str) -> Result<Self, SchemaLoadError> {
        let definition: FormDefinition = serde_json::from_str(json)?;
        Ok(Self::new(definition)?)
    }

    /// Field names in schema order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.index.contains_key(field)
    }

    pub fn is_required(&self, field: &str) -> Result<bool, UnknownFieldError> {
        Ok(self.field(field)?.required)
    }

    pub(crate) fn field(&self, field: &str) -> Result<&CompiledField, UnknownFieldError> {
        self.index
            .get(field)
            .map(|&position| &self.fields[position])
            .ok_or_else(|| UnknownFieldError::new(field))
    }

    pub(crate) fn fields(&self) -> &[CompiledField] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_field;
    use models::{FieldSchema, ValuesMap};

    #[test]
    fn test_schema_keeps_field_order() {
        let schema = FormSchema::new(
            FormDefinition::new()
                .field(FieldSchema::new("password").required("required"))
                .field(FieldSchema::new("confirmPassword").matches_field("password", "Passwords must match"))
                .field(FieldSchema::new("address")),
        )
        .unwrap();

        assert_eq!(
            schema.field_names().collect::<Vec<_>>(),
            vec!["password", "confirmPassword", "address"]
        );
        assert!(schema.contains("address"));
        assert!(!schema.contains("contact"));
        assert_eq!(schema.is_required("password"), Ok(true));
        assert_eq!(schema.is_required("address"), Ok(false));
        assert!(schema.is_required("contact").is_err());
    }

    #[test]
    fn test_required_flag_adds_required_rule() {
        let schema = FormSchema::from_json(
            r#"{"fields": [
                {"name": "firstName", "required": true, "rules": []},
                {"name": "contact", "required": true, "rules": [
                    {"kind": "pattern", "expression": "[0-9]{10}", "message": "Phone no is not valid"}
                ]},
                {"name": "email", "required": true, "rules": [
                    {"kind": "required", "message": "Email is required"}
                ]}
            ]}"#,
        )
        .unwrap();
        let empty = ValuesMap::new();

        assert_eq!(schema.is_required("firstName"), Ok(true));
        assert_eq!(
            validate_field(&schema, &empty, "firstName").unwrap(),
            vec![DEFAULT_REQUIRED_MESSAGE]
        );
        assert_eq!(
            validate_field(&schema, &empty, "contact").unwrap(),
            vec![DEFAULT_REQUIRED_MESSAGE]
        );
        assert_eq!(
            validate_field(&schema, &ValuesMap::new().with("contact", "abc"), "contact").unwrap(),
            vec!["Phone no is not valid"]
        );
        assert_eq!(
            validate_field(&schema, &empty, "email").unwrap(),
            vec!["Email is required"]
        );
    }

    #[test]
    fn test_match_target_may_be_declared_later() {
        let schema = FormSchema::new(
            FormDefinition::new()
                .field(FieldSchema::new("confirmPassword").matches_field("password", "Passwords must match"))
                .field(FieldSchema::new("password")),
        );

        assert!(schema.is_ok());
    }

    #[test]
    fn test_unknown_match_target_is_rejected() {
        let err = FormSchema::new(
            FormDefinition::new()
                .field(FieldSchema::new("password"))
                .field(FieldSchema::new("confirmPassword").matches_field("pasword", "Passwords must match")),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            RuleConfigurationError::UnknownMatchTarget { ref field, ref target }
                if field == "confirmPassword" && target == "pasword"
        ));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = FormSchema::new(
            FormDefinition::new()
                .field(FieldSchema::new("email"))
                .field(FieldSchema::new("email")),
        )
        .unwrap_err();

        assert!(matches!(err, RuleConfigurationError::DuplicateField { ref field } if field == "email"));
    }

    #[test]
    fn test_empty_field_name_is_rejected() {
        let err = FormSchema::new(FormDefinition::new().field(FieldSchema::new(""))).unwrap_err();

        assert!(matches!(err, RuleConfigurationError::EmptyFieldName));
    }

    #[test]
    fn test_unparseable_pattern_is_rejected() {
        let err = FormSchema::new(
            FormDefinition::new().field(FieldSchema::new("contact").pattern(r"\d{10", "Phone no is not valid")),
        )
        .unwrap_err();

        assert!(matches!(err, RuleConfigurationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_from_json() {
        let schema = FormSchema::from_json(
            r#"{"fields": [
                {"name": "password", "rules": [{"kind": "required", "message": "required"}]},
                {"name": "confirmPassword", "rules": [
                    {"kind": "matchesField", "field": "password", "message": "Passwords must match"}
                ]}
            ]}"#,
        )
        .unwrap();

        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_from_json_reports_parse_and_configuration_errors() {
        assert!(matches!(
            FormSchema::from_json("{\"fields\": ["),
            Err(SchemaLoadError::Parse(_))
        ));
        assert!(matches!(
            FormSchema::from_json(
                r#"{"fields": [{"name": "a", "rules": [
                    {"kind": "matchesField", "field": "b", "message": "must match"}
                ]}]}"#
            ),
            Err(SchemaLoadError::Configuration(
                RuleConfigurationError::UnknownMatchTarget { .. }
            ))
        ));
    }
}
