//! Profile finalization: inference plus aggregate metrics.

use super::InferenceRuleSet;
use crate::domain::foundation::{ProfileIncompleteError, Timestamp};
use crate::domain::profile::{
    CategoryDetails, FinishedProfile, OnboardingProfile, ProfileMetrics,
};

/// Turns a completed questionnaire into an immutable finished profile.
///
/// Runs the category's rule table, builds the typed per-category summary,
/// and computes the aggregate metrics. Fails closed: an incomplete profile
/// is returned untouched to the caller as an error, never partially
/// finalized.
#[derive(Debug, Clone, Copy)]
pub struct ProfileFinalizer<'a> {
    rules: &'a InferenceRuleSet,
}

impl<'a> ProfileFinalizer<'a> {
    /// Creates a finalizer over a rule set.
    pub fn new(rules: &'a InferenceRuleSet) -> Self {
        Self { rules }
    }

    /// Finalizes a profile, consuming it.
    ///
    /// Errors if no category is set, or if the response log is empty —
    /// category selection is itself logged, so an empty log means nothing
    /// was ever answered and the confidence average would be undefined.
    pub fn finalize(
        &self,
        profile: OnboardingProfile,
    ) -> Result<FinishedProfile, ProfileIncompleteError> {
        let category = profile
            .category()
            .ok_or(ProfileIncompleteError::CategoryUnset)?;
        let metrics = ProfileMetrics::from_responses(profile.response_log())
            .ok_or(ProfileIncompleteError::EmptyResponseLog)?;

        let outcome = self.rules.evaluate(category, &profile);
        let details = CategoryDetails::from_fields(category, profile.fields());

        let (profile_id, response_log) = profile.into_parts();
        Ok(FinishedProfile::new(
            profile_id,
            category,
            details,
            outcome.tags,
            outcome.behavior_patterns,
            metrics,
            response_log,
            Timestamp::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::definitions::fields;
    use crate::domain::catalog::default_catalog;
    use crate::domain::engine::ResponseRecorder;
    use crate::domain::foundation::UserCategory;
    use crate::domain::inference::default_rules;
    use crate::domain::profile::{AnswerValue, PreferenceStrength};

    fn finalizer() -> ProfileFinalizer<'static> {
        ProfileFinalizer::new(default_rules())
    }

    #[test]
    fn finalize_without_category_fails() {
        let result = finalizer().finalize(OnboardingProfile::new());
        assert_eq!(result.unwrap_err(), ProfileIncompleteError::CategoryUnset);
    }

    #[test]
    fn finalize_with_category_but_empty_log_fails() {
        // Only reachable by bypassing the recorder, but the gate holds.
        let mut profile = OnboardingProfile::new();
        profile.set_category_for_test(UserCategory::Customer);
        let result = finalizer().finalize(profile);
        assert_eq!(result.unwrap_err(), ProfileIncompleteError::EmptyResponseLog);
    }

    #[test]
    fn category_only_profile_finalizes_at_twenty_percent() {
        let recorder = ResponseRecorder::new(default_catalog());
        let mut profile = OnboardingProfile::new();
        recorder
            .record_answer(&mut profile, fields::CATEGORY, AnswerValue::choice("organizer"))
            .unwrap();

        let finished = finalizer().finalize(profile).unwrap();
        assert_eq!(finished.metrics().completion_rate, 20.0);
        assert_eq!(
            finished.metrics().preference_strength,
            PreferenceStrength::Medium
        );
        assert_eq!(finished.category(), UserCategory::Organizer);
    }

    #[test]
    fn finished_profile_carries_labels_log_and_details() {
        let recorder = ResponseRecorder::new(default_catalog());
        let mut profile = OnboardingProfile::new();
        recorder
            .record_answer(&mut profile, fields::CATEGORY, AnswerValue::choice("customer"))
            .unwrap();
        recorder
            .record_answer(
                &mut profile,
                fields::INTERESTS,
                AnswerValue::selections(["concerts"]),
            )
            .unwrap();
        let expected_id = profile.id();

        let finished = finalizer().finalize(profile).unwrap();
        assert_eq!(finished.profile_id(), expected_id);
        assert!(finished.tags().iter().any(|t| t == "Live Music"));
        assert!(finished
            .behavior_patterns()
            .iter()
            .any(|p| p == "music-enthusiast"));
        assert_eq!(finished.response_log().len(), 2);
        assert_eq!(finished.details().category(), UserCategory::Customer);
    }

    #[test]
    fn finalize_is_a_pure_function_of_final_values() {
        let build = || {
            let recorder = ResponseRecorder::new(default_catalog());
            let mut profile = OnboardingProfile::new();
            recorder
                .record_answer(&mut profile, fields::CATEGORY, AnswerValue::choice("customer"))
                .unwrap();
            recorder
                .record_answer(
                    &mut profile,
                    fields::INTERESTS,
                    AnswerValue::selections(["concerts"]),
                )
                .unwrap();
            profile
        };
        let a = finalizer().finalize(build()).unwrap();
        let b = finalizer().finalize(build()).unwrap();
        assert_eq!(a.tags(), b.tags());
        assert_eq!(a.behavior_patterns(), b.behavior_patterns());
        assert_eq!(a.metrics().completion_rate, b.metrics().completion_rate);
    }
}
