//! Declarative applicability conditions.
//!
//! Conditions are pure, serializable predicates over the in-progress
//! profile. They replace closure-based branching so that question
//! eligibility and inference predicates are independently testable and the
//! catalog itself could move server-side unchanged.
//!
//! A condition that references an unanswered or unknown field evaluates
//! false rather than erroring: a malformed predicate must degrade to
//! "not eligible", never block the whole questionnaire.

use serde::{Deserialize, Serialize};

use super::QuestionId;
use crate::domain::foundation::UserCategory;
use crate::domain::profile::OnboardingProfile;

/// A pure predicate over the in-progress profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Unconditionally eligible.
    Always,

    /// The profile's selected category matches.
    CategoryIs(UserCategory),

    /// A single-choice field holds exactly this value.
    FieldEquals { field: QuestionId, value: String },

    /// A multi-choice field's selections include this value.
    FieldContains { field: QuestionId, value: String },

    /// A free-text field mentions this needle, case-insensitively.
    TextMentions { field: QuestionId, needle: String },

    /// Every sub-condition holds.
    AllOf(Vec<Condition>),

    /// At least one sub-condition holds.
    AnyOf(Vec<Condition>),
}

impl Condition {
    /// Convenience constructor for [`Condition::FieldEquals`].
    pub fn field_equals(field: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self::FieldEquals {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Convenience constructor for [`Condition::FieldContains`].
    pub fn field_contains(field: impl Into<QuestionId>, value: impl Into<String>) -> Self {
        Self::FieldContains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Convenience constructor for [`Condition::TextMentions`].
    pub fn text_mentions(field: impl Into<QuestionId>, needle: impl Into<String>) -> Self {
        Self::TextMentions {
            field: field.into(),
            needle: needle.into(),
        }
    }

    /// Combines this condition with another conjunctively.
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::AllOf(mut conditions) => {
                conditions.push(other);
                Self::AllOf(conditions)
            }
            first => Self::AllOf(vec![first, other]),
        }
    }

    /// Evaluates the condition against a profile snapshot.
    ///
    /// Pure: reads nothing outside the passed profile, mutates nothing.
    /// Any reference to data the profile does not (yet) hold is false.
    pub fn evaluate(&self, profile: &OnboardingProfile) -> bool {
        match self {
            Self::Always => true,
            Self::CategoryIs(category) => profile.category() == Some(*category),
            Self::FieldEquals { field, value } => profile
                .field(field.as_str())
                .is_some_and(|answer| answer.equals(value)),
            Self::FieldContains { field, value } => profile
                .field(field.as_str())
                .is_some_and(|answer| answer.contains(value)),
            Self::TextMentions { field, needle } => profile
                .field(field.as_str())
                .is_some_and(|answer| answer.mentions(needle)),
            Self::AllOf(conditions) => conditions.iter().all(|c| c.evaluate(profile)),
            Self::AnyOf(conditions) => conditions.iter().any(|c| c.evaluate(profile)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::AnswerValue;

    fn profile_with(fields: &[(&str, AnswerValue)]) -> OnboardingProfile {
        let mut profile = OnboardingProfile::new();
        for (id, value) in fields {
            profile.set_field_for_test(QuestionId::from(*id), value.clone());
        }
        profile
    }

    #[test]
    fn always_is_true_on_empty_profile() {
        assert!(Condition::Always.evaluate(&OnboardingProfile::new()));
    }

    #[test]
    fn category_is_false_while_unset() {
        let profile = OnboardingProfile::new();
        assert!(!Condition::CategoryIs(UserCategory::Customer).evaluate(&profile));
    }

    #[test]
    fn field_equals_matches_choice_value() {
        let profile = profile_with(&[("preferredVibe", AnswerValue::choice("chill-outdoor"))]);
        assert!(Condition::field_equals("preferredVibe", "chill-outdoor").evaluate(&profile));
        assert!(!Condition::field_equals("preferredVibe", "energetic-indoor").evaluate(&profile));
    }

    #[test]
    fn field_contains_checks_list_membership() {
        let profile = profile_with(&[("interests", AnswerValue::selections(["concerts", "sports"]))]);
        assert!(Condition::field_contains("interests", "concerts").evaluate(&profile));
        assert!(!Condition::field_contains("interests", "theater").evaluate(&profile));
    }

    #[test]
    fn text_mentions_is_case_insensitive() {
        let profile = profile_with(&[(
            "targetAudience",
            AnswerValue::text("Natural light-focused luxury photography"),
        )]);
        assert!(Condition::text_mentions("targetAudience", "NATURAL LIGHT").evaluate(&profile));
        assert!(Condition::text_mentions("targetAudience", "luxury").evaluate(&profile));
        assert!(!Condition::text_mentions("targetAudience", "budget").evaluate(&profile));
    }

    #[test]
    fn unanswered_field_evaluates_false_not_error() {
        let profile = OnboardingProfile::new();
        assert!(!Condition::field_equals("missing", "x").evaluate(&profile));
        assert!(!Condition::field_contains("missing", "x").evaluate(&profile));
        assert!(!Condition::text_mentions("missing", "x").evaluate(&profile));
    }

    #[test]
    fn shape_mismatched_reference_evaluates_false() {
        // A list field probed with equality, a text probe on a list: both false.
        let profile = profile_with(&[("interests", AnswerValue::selections(["concerts"]))]);
        assert!(!Condition::field_equals("interests", "concerts").evaluate(&profile));
        assert!(!Condition::text_mentions("interests", "concerts").evaluate(&profile));
    }

    #[test]
    fn all_of_and_any_of_combine() {
        let profile = profile_with(&[
            ("interests", AnswerValue::selections(["concerts"])),
            ("preferredVibe", AnswerValue::choice("chill-outdoor")),
        ]);
        let both = Condition::field_contains("interests", "concerts")
            .and(Condition::field_equals("preferredVibe", "chill-outdoor"));
        assert!(both.evaluate(&profile));

        let either = Condition::AnyOf(vec![
            Condition::field_contains("interests", "theater"),
            Condition::field_equals("preferredVibe", "chill-outdoor"),
        ]);
        assert!(either.evaluate(&profile));

        let neither = Condition::AllOf(vec![
            Condition::field_contains("interests", "theater"),
            Condition::field_equals("preferredVibe", "chill-outdoor"),
        ]);
        assert!(!neither.evaluate(&profile));
    }

    #[test]
    fn conditions_are_serializable() {
        let condition = Condition::field_contains("interests", "concerts")
            .and(Condition::CategoryIs(UserCategory::Customer));
        let json = serde_json::to_string(&condition).unwrap();
        let back: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, condition);
    }
}
