//! Aggregate metrics derived from the response log at finalization.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResponseRecord;

/// Baseline number of answers a "typical" onboarding flow collects.
///
/// This is a UX normalization constant, not a measured or per-category
/// value: branch lengths vary by category, but the progress indicator is
/// normalized against a fixed baseline so it stays legible. Changing this
/// to a dynamic per-category count would make longer branches show
/// completion rates that never reach 100%.
pub const EXPECTED_BASELINE_QUESTION_COUNT: usize = 5;

/// Minimum number of answers for a profile to count as high-strength.
pub const HIGH_STRENGTH_ANSWER_COUNT: usize = 4;

/// Coarse label for how much signal the profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceStrength {
    High,
    Medium,
}

impl PreferenceStrength {
    /// Derives strength from the number of recorded answers.
    pub fn from_answer_count(count: usize) -> Self {
        if count >= HIGH_STRENGTH_ANSWER_COUNT {
            Self::High
        } else {
            Self::Medium
        }
    }
}

impl fmt::Display for PreferenceStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

/// Aggregate metrics over the response log.
///
/// The response log is the single source of truth here: field counts are
/// never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetrics {
    /// `log length / EXPECTED_BASELINE_QUESTION_COUNT * 100`. Always >= 0;
    /// may exceed 100 for branches longer than the baseline.
    pub completion_rate: f64,
    /// Arithmetic mean of the log's confidence scores, in [0, 1].
    pub average_confidence: f64,
    /// Fixed-threshold strength label.
    pub preference_strength: PreferenceStrength,
}

impl ProfileMetrics {
    /// Computes metrics from a response log.
    ///
    /// Returns `None` for an empty log, where the confidence average would
    /// be undefined; finalization refuses to run in that case.
    pub fn from_responses(log: &[ResponseRecord]) -> Option<Self> {
        if log.is_empty() {
            return None;
        }
        let count = log.len();
        let confidence_sum: f64 = log.iter().map(|r| r.confidence.value()).sum();
        Some(Self {
            completion_rate: count as f64 / EXPECTED_BASELINE_QUESTION_COUNT as f64 * 100.0,
            average_confidence: confidence_sum / count as f64,
            preference_strength: PreferenceStrength::from_answer_count(count),
        })
    }
}
