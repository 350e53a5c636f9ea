//! Answer recording: validation, the response log, and field updates.

use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{Confidence, Timestamp, UserCategory, ValidationError};
use crate::domain::profile::{AnswerValue, OnboardingProfile, ResponseRecord};

/// Records validated answers into a profile.
///
/// All checks run before any mutation, so a rejected answer leaves the
/// profile exactly as it was, and a successful one updates the response log
/// and the field map together.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRecorder<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> ResponseRecorder<'a> {
    /// Creates a recorder over a catalog.
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// Records an answer with the default confidence score.
    pub fn record_answer(
        &self,
        profile: &mut OnboardingProfile,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), ValidationError> {
        self.record_answer_with_confidence(profile, question_id, value, Confidence::DEFAULT)
    }

    /// Records an answer with an explicit confidence score.
    ///
    /// Rejects, without mutating the profile:
    /// - ids not present in the catalog;
    /// - ids that already have an answer (answers are write-once);
    /// - values whose shape does not match the question's kind;
    /// - category answers that are not a recognized category.
    pub fn record_answer_with_confidence(
        &self,
        profile: &mut OnboardingProfile,
        question_id: &str,
        value: AnswerValue,
        confidence: Confidence,
    ) -> Result<(), ValidationError> {
        let question =
            self.catalog
                .question(question_id)
                .ok_or_else(|| ValidationError::UnknownQuestion {
                    question_id: question_id.to_string(),
                })?;

        if profile.is_answered(question_id) {
            return Err(ValidationError::AlreadyAnswered {
                question_id: question_id.to_string(),
            });
        }

        if !value.matches_kind(question.kind()) {
            return Err(ValidationError::AnswerShapeMismatch {
                question_id: question_id.to_string(),
                expected: question.kind().expected_shape(),
                actual: value.shape_name(),
            });
        }

        let category = if question.is_category_question() {
            let selected = match &value {
                AnswerValue::Choice(choice) => UserCategory::from_answer(choice),
                _ => None,
            };
            match selected {
                Some(category) => Some(category),
                None => {
                    return Err(ValidationError::AnswerShapeMismatch {
                        question_id: question_id.to_string(),
                        expected: "one of 'customer', 'vendor' or 'organizer'",
                        actual: value.shape_name(),
                    })
                }
            }
        } else {
            None
        };

        // Validation complete; log entry and field update land together.
        profile.record(
            ResponseRecord {
                question_id: question.id().clone(),
                prompt: question.prompt().to_string(),
                value,
                recorded_at: Timestamp::now(),
                confidence,
            },
            category,
        );
        Ok(())
    }
}
