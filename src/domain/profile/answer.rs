//! Answer values and their shape rules.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::QuestionKind;

/// The value recorded for one answered question.
///
/// Shape must match the question's declared kind. An empty selection list or
/// empty text still counts as an answer; the question is never re-asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    /// One option value from a single-choice question.
    Choice(String),
    /// Selected option values from a multi-choice question.
    Selections(Vec<String>),
    /// Free text.
    Text(String),
}

impl AnswerValue {
    /// Creates a single-choice answer.
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    /// Creates a multi-choice answer.
    pub fn selections<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selections(values.into_iter().map(Into::into).collect())
    }

    /// Creates a free-text answer.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Whether this value's shape satisfies the given question kind.
    pub fn matches_kind(&self, kind: QuestionKind) -> bool {
        matches!(
            (self, kind),
            (Self::Choice(_), QuestionKind::SingleChoice)
                | (Self::Selections(_), QuestionKind::MultiChoice)
                | (Self::Text(_), QuestionKind::FreeText)
        )
    }

    /// Human-readable shape name, used in validation error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Self::Choice(_) => "a single choice",
            Self::Selections(_) => "a list of selections",
            Self::Text(_) => "free text",
        }
    }

    /// Exact equality against a choice value. False for other shapes.
    pub fn equals(&self, value: &str) -> bool {
        matches!(self, Self::Choice(v) if v == value)
    }

    /// Membership test against a selection list. False for other shapes.
    pub fn contains(&self, value: &str) -> bool {
        matches!(self, Self::Selections(values) if values.iter().any(|v| v == value))
    }

    /// Case-insensitive substring test against free text. False for other shapes.
    pub fn mentions(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.to_lowercase().contains(&needle.to_lowercase()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_kind_pairs_shapes_with_kinds() {
        assert!(AnswerValue::choice("x").matches_kind(QuestionKind::SingleChoice));
        assert!(AnswerValue::selections(["x"]).matches_kind(QuestionKind::MultiChoice));
        assert!(AnswerValue::text("x").matches_kind(QuestionKind::FreeText));

        assert!(!AnswerValue::selections(["x"]).matches_kind(QuestionKind::FreeText));
        assert!(!AnswerValue::choice("x").matches_kind(QuestionKind::MultiChoice));
        assert!(!AnswerValue::text("x").matches_kind(QuestionKind::SingleChoice));
    }

    #[test]
    fn empty_values_still_match_their_kind() {
        assert!(AnswerValue::selections(Vec::<String>::new())
            .matches_kind(QuestionKind::MultiChoice));
        assert!(AnswerValue::text("").matches_kind(QuestionKind::FreeText));
    }

    #[test]
    fn equals_only_applies_to_choices() {
        assert!(AnswerValue::choice("chill-outdoor").equals("chill-outdoor"));
        assert!(!AnswerValue::text("chill-outdoor").equals("chill-outdoor"));
    }

    #[test]
    fn contains_only_applies_to_selections() {
        let value = AnswerValue::selections(["concerts", "sports"]);
        assert!(value.contains("concerts"));
        assert!(!value.contains("theater"));
        assert!(!AnswerValue::choice("concerts").contains("concerts"));
    }

    #[test]
    fn mentions_ignores_case() {
        let value = AnswerValue::text("Natural light-focused luxury photography");
        assert!(value.mentions("natural light"));
        assert!(value.mentions("LUXURY"));
        assert!(!value.mentions("neon"));
    }
}
