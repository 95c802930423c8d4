use serde::{Deserialize, Serialize};

/// The predicate a rule applies, with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RuleKind {
    /// Value must be non-empty after trimming
    Required,
    /// Non-empty value must fully match `expression`, and each of `contains`
    /// must match somewhere in it
    #[serde(rename_all = "camelCase")]
    Pattern {
        expression: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        contains: Vec<String>,
    },
    /// Non-empty value must look like an email address
    Email,
    /// Value must equal the value of another field
    #[serde(rename_all = "camelCase")]
    MatchesField { field: String },
    /// Non-empty value must have at least `min` characters
    #[serde(rename_all = "camelCase")]
    MinLength { min: usize },
}

/// A single rule attached to a field, plus the message shown when it fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(flatten)]
    pub kind: RuleKind,
    pub message: String,
}

impl Rule {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Required, message)
    }

    pub fn pattern(expression: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            RuleKind::Pattern {
                expression: expression.into(),
                contains: Vec::new(),
            },
            message,
        )
    }

    /// A pattern rule with extra "must contain" expressions, the equivalent
    /// of `(?=.*X)` lookaheads.
    pub fn pattern_containing<I, S>(
        expression: impl Into<String>,
        contains: I,
        message: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            RuleKind::Pattern {
                expression: expression.into(),
                contains: contains.into_iter().map(Into::into).collect(),
            },
            message,
        )
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::new(RuleKind::Email, message)
    }

    pub fn matches_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            RuleKind::MatchesField {
                field: field.into(),
            },
            message,
        )
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(RuleKind::MinLength { min }, message)
    }

    pub fn is_required(&self) -> bool {
        matches!(self.kind, RuleKind::Required)
    }
}
