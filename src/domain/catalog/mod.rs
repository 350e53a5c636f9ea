//! Catalog module - Question definitions and the static onboarding catalog.
//!
//! A catalog is an ordered, immutable list of questions with declarative
//! applicability conditions. Structural rules (unique ids, category question
//! first and unconditioned) are enforced at construction time.

mod catalog;
mod condition;
pub mod definitions;
mod question;

pub use catalog::QuestionCatalog;
pub use condition::Condition;
pub use definitions::default_catalog;
pub use question::{Question, QuestionId, QuestionKind, QuestionOption, CATEGORY_QUESTION_ID};
