//! Application layer - Orchestration of the onboarding flow.

mod session;

pub use session::{OnboardingSession, OnboardingSessionError};
