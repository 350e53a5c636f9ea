//! Response log entries.

use serde::{Deserialize, Serialize};

use super::AnswerValue;
use crate::domain::catalog::QuestionId;
use crate::domain::foundation::{Confidence, Timestamp};

/// One entry of the append-only response log.
///
/// `prompt` is the literal question text shown to the user at the moment of
/// answering, not an id-based lookup: historical display of past answers
/// stays stable even if the catalog's wording is later edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// The question this answers.
    pub question_id: QuestionId,
    /// The prompt text at the time of asking.
    pub prompt: String,
    /// The recorded value.
    pub value: AnswerValue,
    /// When the answer was recorded.
    pub recorded_at: Timestamp,
    /// Confidence score attached to this answer.
    pub confidence: Confidence,
}
