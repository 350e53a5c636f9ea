//! OnboardingProfile aggregate root.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{AnswerValue, ResponseRecord};
use crate::domain::catalog::QuestionId;
use crate::domain::foundation::{Timestamp, UserCategory};

/// Unique identifier for an onboarding profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(Uuid);

impl ProfileId {
    /// Creates a new random profile ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The in-progress onboarding profile.
///
/// Created empty at session start and mutated only through the response
/// recorder. Invariants:
///
/// - `category` is set at most once (by the category question) and never
///   overwritten;
/// - the response log is append-only and its length always equals the number
///   of answered fields;
/// - a field that has any value, including an empty list or string, counts
///   as answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingProfile {
    id: ProfileId,
    category: Option<UserCategory>,
    fields: BTreeMap<QuestionId, AnswerValue>,
    response_log: Vec<ResponseRecord>,
    started_at: Timestamp,
}

impl OnboardingProfile {
    /// Creates an empty profile for a new session.
    pub fn new() -> Self {
        Self {
            id: ProfileId::new(),
            category: None,
            fields: BTreeMap::new(),
            response_log: Vec::new(),
            started_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn category(&self) -> Option<UserCategory> {
        self.category
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    /// The answered fields, keyed by question id.
    pub fn fields(&self) -> &BTreeMap<QuestionId, AnswerValue> {
        &self.fields
    }

    /// Looks up an answered field by question id.
    pub fn field(&self, question_id: &str) -> Option<&AnswerValue> {
        self.fields.get(question_id)
    }

    /// Whether a question id already has an answer.
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.fields.contains_key(question_id)
    }

    /// The append-only response log, in recording order.
    pub fn response_log(&self) -> &[ResponseRecord] {
        &self.response_log
    }

    /// Number of answers recorded so far.
    pub fn answered_count(&self) -> usize {
        self.response_log.len()
    }

    /// Applies a validated answer: appends the log entry and sets the field
    /// in one step, so no caller ever observes one without the other.
    ///
    /// The recorder is responsible for all validation; this method only
    /// upholds the category write-once rule.
    pub(crate) fn record(&mut self, record: ResponseRecord, category: Option<UserCategory>) {
        if self.category.is_none() {
            if let Some(category) = category {
                self.category = Some(category);
            }
        }
        self.fields
            .insert(record.question_id.clone(), record.value.clone());
        self.response_log.push(record);
    }

    /// Decomposes the profile at finalization time.
    pub(crate) fn into_parts(self) -> (ProfileId, Vec<ResponseRecord>) {
        (self.id, self.response_log)
    }

    /// Test-only backdoor for building profiles in specific field states.
    #[cfg(test)]
    pub(crate) fn set_field_for_test(&mut self, question_id: QuestionId, value: AnswerValue) {
        self.fields.insert(question_id, value);
    }

    /// Test-only backdoor for forcing a category.
    #[cfg(test)]
    pub(crate) fn set_category_for_test(&mut self, category: UserCategory) {
        self.category = Some(category);
    }
}

impl Default for OnboardingProfile {
    fn default() -> Self {
        Self::new()
    }
}
