//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the Eventide onboarding domain.

mod category;
mod confidence;
mod errors;
mod state_machine;
mod timestamp;

pub use category::UserCategory;
pub use confidence::Confidence;
pub use errors::{CatalogError, ProfileIncompleteError, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
