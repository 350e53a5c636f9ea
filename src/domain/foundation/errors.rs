//! Error types for the onboarding domain.
//!
//! All errors here are local, recoverable values returned to the immediate
//! caller. The engine rejects malformed input in place without changing
//! state; nothing in this module represents a crash path.

use thiserror::Error;

/// Errors raised while recording an answer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Answers are write-once; a question id that already has a field is
    /// rejected without mutating the profile.
    #[error("Question '{question_id}' has already been answered")]
    AlreadyAnswered { question_id: String },

    /// The id does not exist in the catalog the recorder was given.
    #[error("Question '{question_id}' is not in the catalog")]
    UnknownQuestion { question_id: String },

    /// The answer value's shape does not match the question's declared kind.
    #[error("Answer for '{question_id}' must be {expected}, got {actual}")]
    AnswerShapeMismatch {
        question_id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Confidence scores live in [0, 1].
    #[error("Confidence must be between 0 and 1, got {actual}")]
    ConfidenceOutOfRange { actual: f64 },
}

/// Errors raised when finalization is attempted too early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileIncompleteError {
    /// No category has been selected yet.
    #[error("Cannot finalize a profile before a category is selected")]
    CategoryUnset,

    /// Category selection is itself logged, so an empty log means nothing
    /// was ever answered and the confidence average would be undefined.
    #[error("Cannot finalize a profile with an empty response log")]
    EmptyResponseLog,
}

/// Structural errors detected when a question catalog is constructed.
///
/// These are programming errors in catalog definitions, caught at
/// construction time rather than mid-questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Question id '{question_id}' appears more than once in the catalog")]
    DuplicateQuestionId { question_id: String },

    #[error("Catalog has no category-selection question")]
    MissingCategoryQuestion,

    #[error("The category-selection question must be first in catalog order")]
    CategoryQuestionNotFirst,

    #[error("The category-selection question must not carry a condition")]
    ConditionedCategoryQuestion,

    #[error("Choice question '{question_id}' has no options")]
    EmptyOptions { question_id: String },
}
