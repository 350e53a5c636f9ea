//! Question definition types.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::Condition;

/// The id of the distinguished category-selection question.
///
/// Exactly one question in a catalog carries this id; it is always asked
/// first while the profile's category is unset.
pub const CATEGORY_QUESTION_ID: &str = "category";

/// Unique string key for a question.
///
/// Doubles as the profile field name the answer populates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a question id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The answer shape a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Exactly one option value.
    SingleChoice,
    /// Zero or more option values.
    MultiChoice,
    /// Unstructured text.
    FreeText,
}

impl QuestionKind {
    /// Human-readable shape name, used in validation error messages.
    pub fn expected_shape(&self) -> &'static str {
        match self {
            Self::SingleChoice => "a single choice",
            Self::MultiChoice => "a list of selections",
            Self::FreeText => "free text",
        }
    }
}

/// One selectable value of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Stable value recorded into the profile.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Optional longer description shown under the label.
    pub description: Option<String>,
    /// Optional icon hint for the presentation layer.
    pub icon: Option<String>,
}

impl QuestionOption {
    /// Creates an option with value and label only.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            icon: None,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an icon hint.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A single question definition.
///
/// The `condition` is a pure predicate over the in-progress profile,
/// re-evaluated fresh on every selection cycle. The `analysis_note` is
/// display-only and never read by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    kind: QuestionKind,
    options: Vec<QuestionOption>,
    condition: Condition,
    analysis_note: Option<String>,
}

impl Question {
    /// Creates a single-choice question.
    pub fn single_choice(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::SingleChoice,
            options,
            condition: Condition::Always,
            analysis_note: None,
        }
    }

    /// Creates a multi-choice question.
    pub fn multi_choice(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::MultiChoice,
            options,
            condition: Condition::Always,
            analysis_note: None,
        }
    }

    /// Creates a free-text question.
    pub fn free_text(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind: QuestionKind::FreeText,
            options: Vec::new(),
            condition: Condition::Always,
            analysis_note: None,
        }
    }

    /// Attaches an applicability condition.
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    /// Attaches a display-only analysis note.
    pub fn with_analysis_note(mut self, note: impl Into<String>) -> Self {
        self.analysis_note = Some(note.into());
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn analysis_note(&self) -> Option<&str> {
        self.analysis_note.as_deref()
    }

    /// Whether this is the distinguished category-selection question.
    pub fn is_category_question(&self) -> bool {
        self.id.as_str() == CATEGORY_QUESTION_ID
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
