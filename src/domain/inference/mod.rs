//! Inference module - Rule-based derivation of the personalization profile.
//!
//! A table of declarative rules per user category maps predicates over the
//! finished field set to recommendation tags and behavior-pattern labels.
//! "Confidence" and "behavior pattern" are fixed heuristic labels; this
//! module specifies the mechanism that evaluates whatever rule set is
//! configured, not a learned model.

mod finalizer;
mod rule;
mod rules;

pub use finalizer::ProfileFinalizer;
pub use rule::{InferenceOutcome, InferenceRule, InferenceRuleSet};
pub use rules::default_rules;
