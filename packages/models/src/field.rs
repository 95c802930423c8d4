use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// One form field and its ordered rules.
///
/// `required` may be set without a `required` rule; compiling the schema then
/// adds one with a default message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub required: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
            required: false,
        }
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.rule(Rule::required(message))
    }

    pub fn pattern(self, expression: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::pattern(expression, message))
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::email(message))
    }

    pub fn matches_field(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::matches_field(field, message))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::min_length(min, message))
    }

    /// Flagged required, or carrying a `required` rule.
    pub fn is_required(&self) -> bool {
        self.required || self.has_required_rule()
    }

    pub fn has_required_rule(&self) -> bool {
        self.rules.iter().any(Rule::is_required)
    }
}
