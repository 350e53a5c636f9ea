//! Next-question selection over a conditional catalog.

use super::OnboardingState;
use crate::domain::catalog::{Question, QuestionCatalog};
use crate::domain::profile::OnboardingProfile;

/// Selects the next unanswered, applicable question for a profile.
///
/// Selection is a linear scan over the static catalog: the first eligible
/// question in declared order wins. That keeps "why this question" trivially
/// explainable and makes the presented sequence deterministic for any fixed
/// catalog and answer sequence, even though answer combinations change which
/// questions are reachable at all.
#[derive(Debug, Clone, Copy)]
pub struct QuestionnaireEngine<'a> {
    catalog: &'a QuestionCatalog,
}

impl<'a> QuestionnaireEngine<'a> {
    /// Creates an engine over a catalog.
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this engine selects from.
    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    /// Returns the next question to present, or `None` when the
    /// questionnaire is complete for this profile.
    ///
    /// While the profile's category is unset, the category question is
    /// returned unconditionally, regardless of any other answered fields.
    /// Afterwards, the scan skips the category question, already-answered
    /// ids, and questions whose condition evaluates false.
    pub fn next_question(&self, profile: &OnboardingProfile) -> Option<&'a Question> {
        if profile.category().is_none() {
            return Some(self.catalog.category_question());
        }

        self.catalog
            .questions()
            .iter()
            .filter(|question| !question.is_category_question())
            .find(|question| {
                !profile.is_answered(question.id().as_str())
                    && question.condition().evaluate(profile)
            })
    }

    /// Derived lifecycle view of a profile.
    ///
    /// `Done` is not derivable here: a finalized profile no longer exists
    /// as an `OnboardingProfile`.
    pub fn state(&self, profile: &OnboardingProfile) -> OnboardingState {
        if profile.category().is_none() {
            OnboardingState::AwaitingCategory
        } else if self.next_question(profile).is_some() {
            OnboardingState::AwaitingAnswer
        } else {
            OnboardingState::Finalizing
        }
    }
}
