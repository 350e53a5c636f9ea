//! Declarative inference rules and their evaluation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Condition;
use crate::domain::foundation::UserCategory;
use crate::domain::profile::OnboardingProfile;

/// One inference rule: a predicate plus the labels it emits when it fires.
///
/// Rules are not mutually exclusive; every rule in a table is evaluated
/// independently and all matching rules fire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceRule {
    name: String,
    predicate: Condition,
    tags: Vec<String>,
    patterns: Vec<String>,
}

impl InferenceRule {
    /// Creates a rule with no outputs yet.
    pub fn new(name: impl Into<String>, predicate: Condition) -> Self {
        Self {
            name: name.into(),
            predicate,
            tags: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Sets the recommendation tags this rule emits.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the behavior-pattern labels this rule emits.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn predicate(&self) -> &Condition {
        &self.predicate
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Evaluates the rule's predicate against a profile.
    pub fn matches(&self, profile: &OnboardingProfile) -> bool {
        self.predicate.evaluate(profile)
    }
}

/// What a rule-table evaluation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceOutcome {
    /// Recommendation tags, in rule-table order, deduplicated.
    pub tags: Vec<String>,
    /// Behavior-pattern labels, in rule-table order, deduplicated.
    pub behavior_patterns: Vec<String>,
}

/// One ordered rule table per user category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InferenceRuleSet {
    tables: BTreeMap<UserCategory, Vec<InferenceRule>>,
}

impl InferenceRuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the table for a category.
    pub fn with_table(mut self, category: UserCategory, rules: Vec<InferenceRule>) -> Self {
        self.tables.insert(category, rules);
        self
    }

    /// The rule table for a category. Empty slice if none is configured.
    pub fn table(&self, category: UserCategory) -> &[InferenceRule] {
        self.tables.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Evaluates every rule in the category's table against the profile.
    ///
    /// All matching rules fire; their outputs are appended in table order.
    /// Several rules may emit the same label, so outputs are deduplicated
    /// while preserving first-occurrence order. The result is a pure
    /// function of the profile's final values, with no dependency on the
    /// order answers arrived in.
    pub fn evaluate(&self, category: UserCategory, profile: &OnboardingProfile) -> InferenceOutcome {
        let mut outcome = InferenceOutcome::default();
        for rule in self.table(category) {
            if !rule.matches(profile) {
                continue;
            }
            for tag in rule.tags() {
                push_unique(&mut outcome.tags, tag);
            }
            for pattern in rule.patterns() {
                push_unique(&mut outcome.behavior_patterns, pattern);
            }
        }
        outcome
    }
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|existing| existing == label) {
        labels.push(label.to_string());
    }
}
