//! Ordered, immutable question catalog with construction-time validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Question, QuestionKind};
use crate::domain::foundation::CatalogError;

/// An ordered, static list of question definitions.
///
/// Catalog order is the tie-break for question selection: the engine always
/// returns the first eligible question in declared order, which keeps the
/// flow deterministic for any fixed answer sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Builds a catalog, enforcing the structural rules:
    ///
    /// - the category-selection question exists, is first in order, and
    ///   carries no condition;
    /// - every question id is unique;
    /// - choice questions have at least one option.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let category_position = questions.iter().position(Question::is_category_question);
        match category_position {
            None => return Err(CatalogError::MissingCategoryQuestion),
            Some(0) => {}
            Some(_) => return Err(CatalogError::CategoryQuestionNotFirst),
        }
        if questions[0].condition() != &super::Condition::Always {
            return Err(CatalogError::ConditionedCategoryQuestion);
        }

        let mut seen = BTreeSet::new();
        for question in &questions {
            if !seen.insert(question.id().as_str().to_string()) {
                return Err(CatalogError::DuplicateQuestionId {
                    question_id: question.id().to_string(),
                });
            }
            let needs_options = matches!(
                question.kind(),
                QuestionKind::SingleChoice | QuestionKind::MultiChoice
            );
            if needs_options && question.options().is_empty() {
                return Err(CatalogError::EmptyOptions {
                    question_id: question.id().to_string(),
                });
            }
        }

        Ok(Self { questions })
    }

    /// All questions in declared order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The distinguished category-selection question (always first).
    pub fn category_question(&self) -> &Question {
        &self.questions[0]
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    /// Number of questions, category question included.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<Vec<Question>> for QuestionCatalog {
    type Error = CatalogError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionCatalog> for Vec<Question> {
    fn from(catalog: QuestionCatalog) -> Self {
        catalog.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Condition, QuestionOption, CATEGORY_QUESTION_ID};
    use crate::domain::foundation::UserCategory;

    fn category_question() -> Question {
        Question::single_choice(
            CATEGORY_QUESTION_ID,
            "What brings you here?",
            vec![
                QuestionOption::new("customer", "I attend events"),
                QuestionOption::new("vendor", "I offer services"),
            ],
        )
    }

    fn customer_question(id: &str) -> Question {
        Question::multi_choice(id, "Pick some", vec![QuestionOption::new("a", "A")])
            .when(Condition::CategoryIs(UserCategory::Customer))
    }

    #[test]
    fn valid_catalog_constructs() {
        let catalog =
            QuestionCatalog::new(vec![category_question(), customer_question("interests")])
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.category_question().is_category_question());
    }

    #[test]
    fn catalog_without_category_question_is_rejected() {
        let result = QuestionCatalog::new(vec![customer_question("interests")]);
        assert_eq!(result.unwrap_err(), CatalogError::MissingCategoryQuestion);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = QuestionCatalog::new(vec![]);
        assert_eq!(result.unwrap_err(), CatalogError::MissingCategoryQuestion);
    }

    #[test]
    fn category_question_must_be_first() {
        let result =
            QuestionCatalog::new(vec![customer_question("interests"), category_question()]);
        assert_eq!(result.unwrap_err(), CatalogError::CategoryQuestionNotFirst);
    }

    #[test]
    fn category_question_must_be_unconditioned() {
        let conditioned =
            category_question().when(Condition::CategoryIs(UserCategory::Customer));
        let result = QuestionCatalog::new(vec![conditioned]);
        assert_eq!(result.unwrap_err(), CatalogError::ConditionedCategoryQuestion);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = QuestionCatalog::new(vec![
            category_question(),
            customer_question("interests"),
            customer_question("interests"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateQuestionId {
                question_id: "interests".to_string()
            }
        );
    }

    #[test]
    fn choice_question_without_options_is_rejected() {
        let bare = Question::single_choice("vibe", "Pick", vec![]);
        let result = QuestionCatalog::new(vec![category_question(), bare]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::EmptyOptions {
                question_id: "vibe".to_string()
            }
        );
    }

    #[test]
    fn question_lookup_by_id() {
        let catalog =
            QuestionCatalog::new(vec![category_question(), customer_question("interests")])
                .unwrap();
        assert!(catalog.question("interests").is_some());
        assert!(catalog.question("unknown").is_none());
    }
}
