//! State machine trait for lifecycle status enums.
//!
//! Gives status enums a validated-transition interface so lifecycle rules
//! live next to the enum instead of being re-checked at every call site.

/// Trait for status enums that represent state machines.
///
/// Implementors declare which transitions are legal and get a checked
/// `transition_to` for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, or reports the rejected pair.
    fn transition_to(&self, target: Self) -> Result<Self, String> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(format!("Cannot transition from {:?} to {:?}", self, target))
        }
    }

    /// Checks if the current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::OnboardingState;

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let state = OnboardingState::Finalizing;
        assert_eq!(state.transition_to(OnboardingState::Done), Ok(OnboardingState::Done));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let state = OnboardingState::Done;
        assert!(state.transition_to(OnboardingState::AwaitingCategory).is_err());
    }

    #[test]
    fn is_terminal_matches_valid_transitions() {
        assert!(OnboardingState::Done.is_terminal());
        assert!(!OnboardingState::AwaitingCategory.is_terminal());
    }
}
