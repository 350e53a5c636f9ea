//! Profile module - The onboarding profile aggregate and its derived output.
//!
//! An `OnboardingProfile` is created empty at the start of a session, mutated
//! only through the response recorder, and becomes an immutable
//! `FinishedProfile` once finalization succeeds.

mod answer;
mod finished;
mod metrics;
mod profile;
mod response;

pub use answer::AnswerValue;
pub use finished::{CategoryDetails, FinishedProfile};
pub use metrics::{
    PreferenceStrength, ProfileMetrics, EXPECTED_BASELINE_QUESTION_COUNT,
    HIGH_STRENGTH_ANSWER_COUNT,
};
pub use profile::{OnboardingProfile, ProfileId};
pub use response::ResponseRecord;
