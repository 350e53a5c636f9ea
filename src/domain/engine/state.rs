//! Onboarding lifecycle states.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Lifecycle of one onboarding session.
///
/// `AwaitingCategory` is never re-entered once left; there is no error
/// state, because malformed input is rejected in place without a
/// transition. `Done` corresponds to a successfully finalized profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingState {
    /// No category selected yet; the category question is next.
    AwaitingCategory,
    /// Category set, eligible questions remain.
    AwaitingAnswer,
    /// Selection returned `None`; the profile is ready to finalize.
    Finalizing,
    /// Finalization succeeded; the profile is immutable.
    Done,
}

impl StateMachine for OnboardingState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OnboardingState::*;
        matches!(
            (self, target),
            (AwaitingCategory, AwaitingAnswer)
                | (AwaitingCategory, Finalizing)
                | (AwaitingAnswer, AwaitingAnswer)
                | (AwaitingAnswer, Finalizing)
                | (Finalizing, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OnboardingState::*;
        match self {
            // A one-question catalog can jump straight to Finalizing.
            AwaitingCategory => vec![AwaitingAnswer, Finalizing],
            AwaitingAnswer => vec![AwaitingAnswer, Finalizing],
            Finalizing => vec![Done],
            Done => vec![],
        }
    }
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::AwaitingCategory
    }
}
