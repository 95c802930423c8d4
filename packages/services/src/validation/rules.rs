use std::sync::LazyLock;

use models::{RuleKind, ValuesMap};
use regex::Regex;

use super::errors::RuleConfigurationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email expression is valid")
});

/// A rule ready for evaluation: regexes compiled, parameters resolved.
#[derive(Debug, Clone)]
pub(crate) enum Evaluator {
    Required,
    Pattern { full: Regex, contains: Vec<Regex> },
    Email,
    MatchesField(String),
    MinLength(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledRule {
    pub evaluator: Evaluator,
    pub message: String,
}

impl Evaluator {
    pub(crate) fn compile(field: &str, kind: &RuleKind) -> Result<Self, RuleConfigurationError> {
        let evaluator = match kind {
            RuleKind::Required => Evaluator::Required,
            RuleKind::Pattern {
                expression,
                contains,
            } => Evaluator::Pattern {
                full: compile_regex(field, expression, true)?,
                contains: contains
                    .iter()
                    .map(|e| compile_regex(field, e, false))
                    .collect::<Result<_, _>>()?,
            },
            RuleKind::Email => Evaluator::Email,
            RuleKind::MatchesField { field: target } => Evaluator::MatchesField(target.clone()),
            RuleKind::MinLength { min } => Evaluator::MinLength(*min),
        };
        Ok(evaluator)
    }

    /// Whether `value` satisfies this rule. `values` is consulted by
    /// cross-field rules only.
    pub(crate) fn passes(&self, value: &str, values: &ValuesMap) -> bool {
        match self {
            Evaluator::Required => !value.trim().is_empty(),
            Evaluator::Pattern { full, contains } => {
                value.is_empty()
                    || (full.is_match(value) && contains.iter().all(|re| re.is_match(value)))
            }
            Evaluator::Email => value.is_empty() || EMAIL_REGEX.is_match(value),
            Evaluator::MatchesField(target) => value == values.get(target),
            Evaluator::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
        }
    }
}

fn compile_regex(
    field: &str,
    expression: &str,
    anchored: bool,
) -> Result<Regex, RuleConfigurationError> {
    let source = if anchored {
        format!("^(?:{expression})$")
    } else {
        expression.to_string()
    };
    Regex::new(&source).map_err(|source| RuleConfigurationError::InvalidPattern {
        field: field.to_string(),
        expression: expression.to_string(),
        source,
    })
}
