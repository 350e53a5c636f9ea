//! One user's onboarding session, from first question to persisted profile.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::catalog::{default_catalog, Question, QuestionCatalog};
use crate::domain::engine::{OnboardingState, QuestionnaireEngine, ResponseRecorder};
use crate::domain::foundation::{Confidence, ProfileIncompleteError, ValidationError};
use crate::domain::inference::{default_rules, InferenceRuleSet, ProfileFinalizer};
use crate::domain::profile::{AnswerValue, FinishedProfile, OnboardingProfile};
use crate::ports::{ProfileStore, StoreError};

/// Errors from completing a session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OnboardingSessionError {
    #[error(transparent)]
    Incomplete(#[from] ProfileIncompleteError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Drives one profile through the question/answer cycle.
///
/// The intended loop for the presentation layer:
///
/// 1. call [`next_question`](Self::next_question) and render it;
/// 2. collect a value and call [`submit_answer`](Self::submit_answer) —
///    a `ValidationError` means re-prompt, nothing changed;
/// 3. repeat until `next_question` returns `None`;
/// 4. call [`complete`](Self::complete) to finalize and persist.
///
/// The session may simply be dropped at any point before `complete`; the
/// profile holds no external resources.
pub struct OnboardingSession<'a> {
    engine: QuestionnaireEngine<'a>,
    recorder: ResponseRecorder<'a>,
    finalizer: ProfileFinalizer<'a>,
    profile: OnboardingProfile,
}

impl OnboardingSession<'static> {
    /// Creates a session over the production catalog and rule set.
    pub fn with_defaults() -> Self {
        Self::new(default_catalog(), default_rules())
    }
}

impl<'a> OnboardingSession<'a> {
    /// Creates a session over an explicit catalog and rule set.
    pub fn new(catalog: &'a QuestionCatalog, rules: &'a InferenceRuleSet) -> Self {
        Self {
            engine: QuestionnaireEngine::new(catalog),
            recorder: ResponseRecorder::new(catalog),
            finalizer: ProfileFinalizer::new(rules),
            profile: OnboardingProfile::new(),
        }
    }

    /// The in-progress profile.
    pub fn profile(&self) -> &OnboardingProfile {
        &self.profile
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OnboardingState {
        self.engine.state(&self.profile)
    }

    /// The next question to present, or `None` when questioning is done.
    pub fn next_question(&self) -> Option<&'a Question> {
        self.engine.next_question(&self.profile)
    }

    /// Whether the questionnaire has run out of eligible questions.
    pub fn is_complete(&self) -> bool {
        self.state() == OnboardingState::Finalizing
    }

    /// Records an answer with the default confidence score.
    pub fn submit_answer(
        &mut self,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<(), ValidationError> {
        self.submit_answer_with_confidence(question_id, value, Confidence::DEFAULT)
    }

    /// Records an answer with an explicit confidence score.
    pub fn submit_answer_with_confidence(
        &mut self,
        question_id: &str,
        value: AnswerValue,
        confidence: Confidence,
    ) -> Result<(), ValidationError> {
        self.recorder
            .record_answer_with_confidence(&mut self.profile, question_id, value, confidence)?;
        debug!(
            question_id,
            answered = self.profile.answered_count(),
            "answer recorded"
        );
        Ok(())
    }

    /// Finalizes the profile and appends it to the store.
    ///
    /// The store is fire-and-forget from the engine's perspective: after a
    /// successful append the session is gone and the finished profile is
    /// returned to the caller.
    pub async fn complete(
        self,
        store: &dyn ProfileStore,
    ) -> Result<FinishedProfile, OnboardingSessionError> {
        let finished = self.finalizer.finalize(self.profile)?;
        store.append(&finished).await?;
        info!(
            profile_id = %finished.profile_id(),
            category = %finished.category(),
            tags = finished.tags().len(),
            patterns = finished.behavior_patterns().len(),
            "onboarding session completed"
        );
        Ok(finished)
    }
}

impl Default for OnboardingSession<'static> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStore;
    use crate::domain::catalog::definitions::fields;
    use crate::domain::foundation::UserCategory;

    #[test]
    fn session_starts_awaiting_category() {
        let session = OnboardingSession::with_defaults();
        assert_eq!(session.state(), OnboardingState::AwaitingCategory);
        assert!(session.next_question().unwrap().is_category_question());
        assert!(!session.is_complete());
    }

    #[test]
    fn submitting_follows_the_engine_cycle() {
        let mut session = OnboardingSession::with_defaults();
        session
            .submit_answer(fields::CATEGORY, AnswerValue::choice("customer"))
            .unwrap();

        assert_eq!(session.state(), OnboardingState::AwaitingAnswer);
        assert_eq!(
            session.next_question().unwrap().id().as_str(),
            fields::INTERESTS
        );
    }

    #[test]
    fn validation_errors_leave_the_session_unchanged() {
        let mut session = OnboardingSession::with_defaults();
        session
            .submit_answer(fields::CATEGORY, AnswerValue::choice("customer"))
            .unwrap();

        let err = session
            .submit_answer(fields::CATEGORY, AnswerValue::choice("vendor"))
            .unwrap_err();
        assert!(matches!(err, ValidationError::AlreadyAnswered { .. }));
        assert_eq!(session.profile().category(), Some(UserCategory::Customer));
        assert_eq!(session.profile().answered_count(), 1);
    }

    #[tokio::test]
    async fn complete_persists_and_returns_the_finished_profile() {
        let mut session = OnboardingSession::with_defaults();
        session
            .submit_answer(fields::CATEGORY, AnswerValue::choice("organizer"))
            .unwrap();

        let store = InMemoryProfileStore::new();
        let finished = session.complete(&store).await.unwrap();

        assert_eq!(finished.category(), UserCategory::Organizer);
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(
            store.snapshot().await[0].profile_id(),
            finished.profile_id()
        );
    }

    #[tokio::test]
    async fn complete_without_category_fails_before_touching_the_store() {
        let session = OnboardingSession::with_defaults();
        let store = InMemoryProfileStore::new();

        let err = session.complete(&store).await.unwrap_err();
        assert_eq!(
            err,
            OnboardingSessionError::Incomplete(ProfileIncompleteError::CategoryUnset)
        );
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
