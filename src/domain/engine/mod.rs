//! Engine module - Question selection, answer recording, lifecycle.
//!
//! The engine is single-threaded and synchronous: one profile, one caller,
//! a strict `next_question` → `record_answer` cycle until selection returns
//! `None`, then finalization.

mod questionnaire;
mod recorder;
mod state;

pub use questionnaire::QuestionnaireEngine;
pub use recorder::ResponseRecorder;
pub use state::OnboardingState;
