//! The finished, immutable profile handed to the persistence collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AnswerValue, ProfileId, ProfileMetrics, ResponseRecord};
use crate::domain::catalog::{definitions::fields, QuestionId};
use crate::domain::foundation::{Timestamp, UserCategory};

/// Strongly-typed per-category answer summary.
///
/// Replaces "does this field exist for this category" checks with one
/// discriminated union built once at finalization from the generic field
/// map. Absent answers become `None` or empty lists; the raw response log
/// on [`FinishedProfile`] keeps the full record either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategoryDetails {
    Customer {
        interests: Vec<String>,
        favorite_artists: Vec<String>,
        preferred_vibe: Option<String>,
        location_preference: Option<String>,
        purpose: Option<String>,
        budget_range: Option<String>,
    },
    Vendor {
        services: Vec<String>,
        event_types: Vec<String>,
        target_audience: Option<String>,
        cuisine_styles: Vec<String>,
        price_tier: Option<String>,
    },
    Organizer {
        organization_type: Option<String>,
        event_scale: Option<String>,
        event_frequency: Option<String>,
        support_needs: Vec<String>,
    },
}

impl CategoryDetails {
    /// Builds the typed summary from the generic answered-field map.
    pub fn from_fields(
        category: UserCategory,
        fields_map: &BTreeMap<QuestionId, AnswerValue>,
    ) -> Self {
        let list = |id: &str| -> Vec<String> {
            match fields_map.get(id) {
                Some(AnswerValue::Selections(values)) => values.clone(),
                _ => Vec::new(),
            }
        };
        let choice = |id: &str| -> Option<String> {
            match fields_map.get(id) {
                Some(AnswerValue::Choice(value)) => Some(value.clone()),
                _ => None,
            }
        };
        let text = |id: &str| -> Option<String> {
            match fields_map.get(id) {
                Some(AnswerValue::Text(value)) => Some(value.clone()),
                _ => None,
            }
        };

        match category {
            UserCategory::Customer => Self::Customer {
                interests: list(fields::INTERESTS),
                favorite_artists: list(fields::FAVORITE_ARTISTS),
                preferred_vibe: choice(fields::PREFERRED_VIBE),
                location_preference: choice(fields::LOCATION_PREFERENCE),
                purpose: choice(fields::PURPOSE),
                budget_range: choice(fields::BUDGET_RANGE),
            },
            UserCategory::Vendor => Self::Vendor {
                services: list(fields::SERVICES),
                event_types: list(fields::EVENT_TYPES),
                target_audience: text(fields::TARGET_AUDIENCE),
                cuisine_styles: list(fields::CUISINE_STYLES),
                price_tier: choice(fields::PRICE_TIER),
            },
            UserCategory::Organizer => Self::Organizer {
                organization_type: choice(fields::ORGANIZATION_TYPE),
                event_scale: choice(fields::EVENT_SCALE),
                event_frequency: choice(fields::EVENT_FREQUENCY),
                support_needs: list(fields::SUPPORT_NEEDS),
            },
        }
    }

    /// The category this summary belongs to.
    pub fn category(&self) -> UserCategory {
        match self {
            Self::Customer { .. } => UserCategory::Customer,
            Self::Vendor { .. } => UserCategory::Vendor,
            Self::Organizer { .. } => UserCategory::Organizer,
        }
    }
}

/// The immutable output of a completed onboarding session.
///
/// Fully serializable; the persistence collaborator appends it to an
/// external store and the engine keeps no reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishedProfile {
    profile_id: ProfileId,
    category: UserCategory,
    details: CategoryDetails,
    tags: Vec<String>,
    behavior_patterns: Vec<String>,
    metrics: ProfileMetrics,
    response_log: Vec<ResponseRecord>,
    completed_at: Timestamp,
}

impl FinishedProfile {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        profile_id: ProfileId,
        category: UserCategory,
        details: CategoryDetails,
        tags: Vec<String>,
        behavior_patterns: Vec<String>,
        metrics: ProfileMetrics,
        response_log: Vec<ResponseRecord>,
        completed_at: Timestamp,
    ) -> Self {
        Self {
            profile_id,
            category,
            details,
            tags,
            behavior_patterns,
            metrics,
            response_log,
            completed_at,
        }
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    pub fn category(&self) -> UserCategory {
        self.category
    }

    pub fn details(&self) -> &CategoryDetails {
        &self.details
    }

    /// Recommendation tags emitted by the matching inference rules.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Behavior-pattern labels emitted by the matching inference rules.
    pub fn behavior_patterns(&self) -> &[String] {
        &self.behavior_patterns
    }

    pub fn metrics(&self) -> &ProfileMetrics {
        &self.metrics
    }

    /// The raw response log carried over from the session.
    pub fn response_log(&self) -> &[ResponseRecord] {
        &self.response_log
    }

    pub fn completed_at(&self) -> Timestamp {
        self.completed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_details_pick_up_typed_fields() {
        let mut fields_map = BTreeMap::new();
        fields_map.insert(
            QuestionId::from(fields::INTERESTS),
            AnswerValue::selections(["concerts"]),
        );
        fields_map.insert(
            QuestionId::from(fields::PREFERRED_VIBE),
            AnswerValue::choice("chill-outdoor"),
        );

        let details = CategoryDetails::from_fields(UserCategory::Customer, &fields_map);
        match details {
            CategoryDetails::Customer {
                interests,
                preferred_vibe,
                favorite_artists,
                ..
            } => {
                assert_eq!(interests, vec!["concerts"]);
                assert_eq!(preferred_vibe.as_deref(), Some("chill-outdoor"));
                assert!(favorite_artists.is_empty());
            }
            other => panic!("expected customer details, got {:?}", other),
        }
    }

    #[test]
    fn vendor_details_capture_free_text() {
        let mut fields_map = BTreeMap::new();
        fields_map.insert(
            QuestionId::from(fields::TARGET_AUDIENCE),
            AnswerValue::text("Natural light-focused luxury photography"),
        );

        let details = CategoryDetails::from_fields(UserCategory::Vendor, &fields_map);
        match details {
            CategoryDetails::Vendor { target_audience, .. } => {
                assert_eq!(
                    target_audience.as_deref(),
                    Some("Natural light-focused luxury photography")
                );
            }
            other => panic!("expected vendor details, got {:?}", other),
        }
    }

    #[test]
    fn shape_mismatched_fields_are_dropped_not_crashed() {
        // A list where a choice is expected simply yields None.
        let mut fields_map = BTreeMap::new();
        fields_map.insert(
            QuestionId::from(fields::PREFERRED_VIBE),
            AnswerValue::selections(["chill-outdoor"]),
        );

        let details = CategoryDetails::from_fields(UserCategory::Customer, &fields_map);
        match details {
            CategoryDetails::Customer { preferred_vibe, .. } => assert_eq!(preferred_vibe, None),
            other => panic!("expected customer details, got {:?}", other),
        }
    }

    #[test]
    fn details_serialize_with_category_tag() {
        let details =
            CategoryDetails::from_fields(UserCategory::Organizer, &BTreeMap::new());
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["category"], "organizer");
    }
}
