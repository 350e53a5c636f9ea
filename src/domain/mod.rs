//! Domain layer for the onboarding engine.
//!
//! Organized leaf-first: `foundation` holds shared value objects and errors,
//! `catalog` the question definitions, `profile` the onboarding aggregate,
//! `engine` the selection/recording mechanics, and `inference` the rule-based
//! derivation that runs once questioning completes.

pub mod catalog;
pub mod engine;
pub mod foundation;
pub mod inference;
pub mod profile;
