//! The production inference rule tables.
//!
//! One table per category, kept deliberately flat: each rule names the
//! signal it reads, the predicate, and the labels it emits. Rules fire
//! independently; overlapping emissions (e.g. "Luxury Services" from both
//! the price tier and the pitch text) are collapsed by the evaluator.

use once_cell::sync::Lazy;

use super::{InferenceRule, InferenceRuleSet};
use crate::domain::catalog::definitions::fields;
use crate::domain::catalog::Condition;
use crate::domain::foundation::UserCategory;

static DEFAULT_RULES: Lazy<InferenceRuleSet> = Lazy::new(|| {
    InferenceRuleSet::new()
        .with_table(UserCategory::Customer, customer_rules())
        .with_table(UserCategory::Vendor, vendor_rules())
        .with_table(UserCategory::Organizer, organizer_rules())
});

/// Returns the production rule set.
pub fn default_rules() -> &'static InferenceRuleSet {
    &DEFAULT_RULES
}

// ============================================================================
// Customer rules
// ============================================================================

fn customer_rules() -> Vec<InferenceRule> {
    vec![
        InferenceRule::new(
            "concert-goer",
            Condition::field_contains(fields::INTERESTS, "concerts"),
        )
        .with_tags(["Live Music", "Concert Tickets"])
        .with_patterns(["music-enthusiast"]),
        InferenceRule::new(
            "festival-lover",
            Condition::field_contains(fields::INTERESTS, "festivals"),
        )
        .with_tags(["Music Festivals", "Outdoor Events"])
        .with_patterns(["festival-goer"]),
        InferenceRule::new(
            "sports-fan",
            Condition::field_contains(fields::INTERESTS, "sports"),
        )
        .with_tags(["Sports Events", "Stadium Experiences"])
        .with_patterns(["sports-fan"]),
        InferenceRule::new(
            "theater-goer",
            Condition::field_contains(fields::INTERESTS, "theater"),
        )
        .with_tags(["Theater & Shows"])
        .with_patterns(["culture-seeker"]),
        InferenceRule::new(
            "art-lover",
            Condition::field_contains(fields::INTERESTS, "art-exhibitions"),
        )
        .with_tags(["Art Exhibitions", "Gallery Openings"])
        .with_patterns(["culture-seeker"]),
        InferenceRule::new(
            "foodie",
            Condition::field_contains(fields::INTERESTS, "food-events"),
        )
        .with_tags(["Food Festivals", "Tasting Events"])
        .with_patterns(["foodie"]),
        InferenceRule::new(
            "stadium-rock-fan",
            Condition::field_contains(fields::FAVORITE_ARTISTS, "Coldplay"),
        )
        .with_tags(["Stadium Rock"])
        .with_patterns(["mainstream-rock-fan"]),
        InferenceRule::new(
            "pop-spectacle-fan",
            Condition::field_contains(fields::FAVORITE_ARTISTS, "Taylor Swift"),
        )
        .with_tags(["Pop Spectacle"])
        .with_patterns(["mainstream-pop-fan"]),
        InferenceRule::new(
            "indie-supporter",
            Condition::field_contains(fields::FAVORITE_ARTISTS, "Local Indie Acts"),
        )
        .with_tags(["Indie Pop", "Small Venues"])
        .with_patterns(["indie-supporter"]),
        InferenceRule::new(
            "outdoor-chill",
            Condition::field_equals(fields::PREFERRED_VIBE, "chill-outdoor"),
        )
        .with_tags(["Outdoor Events"])
        .with_patterns(["outdoor-lover"]),
        InferenceRule::new(
            "high-energy",
            Condition::field_equals(fields::PREFERRED_VIBE, "energetic-indoor"),
        )
        .with_tags(["Club Nights", "Arena Events"])
        .with_patterns(["high-energy"]),
        InferenceRule::new(
            "intimate-venues",
            Condition::field_equals(fields::PREFERRED_VIBE, "intimate-venue"),
        )
        .with_tags(["Small Venues"])
        .with_patterns(["intimacy-seeker"]),
        InferenceRule::new(
            "globetrotter",
            Condition::field_equals(fields::LOCATION_PREFERENCE, "international"),
        )
        .with_tags(["Destination Events"])
        .with_patterns(["travel-enthusiast"]),
        InferenceRule::new(
            "homebody",
            Condition::field_equals(fields::LOCATION_PREFERENCE, "local"),
        )
        .with_tags(["Local Events"])
        .with_patterns(["community-focused"]),
        InferenceRule::new(
            "travel-explorer",
            Condition::field_equals(fields::PURPOSE, "explore-travel"),
        )
        .with_tags(["Travel Events"])
        .with_patterns(["travel-focused"]),
        InferenceRule::new(
            "networker",
            Condition::field_equals(fields::PURPOSE, "networking"),
        )
        .with_tags(["Professional Mixers"])
        .with_patterns(["networker"]),
        InferenceRule::new(
            "premium-spender",
            Condition::field_equals(fields::BUDGET_RANGE, "premium"),
        )
        .with_tags(["VIP Experiences"])
        .with_patterns(["premium-spender"]),
    ]
}

// ============================================================================
// Vendor rules
// ============================================================================

fn vendor_rules() -> Vec<InferenceRule> {
    vec![
        InferenceRule::new(
            "photographer",
            Condition::field_contains(fields::SERVICES, "photography"),
        )
        .with_tags(["Event Photography"])
        .with_patterns(["visual-storyteller"]),
        InferenceRule::new(
            "wedding-photographer",
            Condition::field_contains(fields::SERVICES, "photography")
                .and(Condition::field_contains(fields::EVENT_TYPES, "weddings")),
        )
        .with_tags(["Wedding Photographer"])
        .with_patterns(["wedding-specialist"]),
        InferenceRule::new(
            "wedding-vendor",
            Condition::field_contains(fields::EVENT_TYPES, "weddings"),
        )
        .with_tags(["Wedding Specialist"])
        .with_patterns(["wedding-focused"]),
        InferenceRule::new(
            "natural-light-style",
            Condition::text_mentions(fields::TARGET_AUDIENCE, "natural light"),
        )
        .with_tags(["Natural Light Photography"])
        .with_patterns(["aesthetic-driven"]),
        InferenceRule::new(
            "luxury-positioning",
            Condition::AnyOf(vec![
                Condition::text_mentions(fields::TARGET_AUDIENCE, "luxury"),
                Condition::field_equals(fields::PRICE_TIER, "luxury"),
            ]),
        )
        .with_tags(["Luxury Services"])
        .with_patterns(["premium-market"]),
        InferenceRule::new(
            "caterer",
            Condition::field_contains(fields::SERVICES, "catering"),
        )
        .with_tags(["Catering"])
        .with_patterns(["hospitality-provider"]),
        InferenceRule::new(
            "vegan-caterer",
            Condition::field_contains(fields::CUISINE_STYLES, "vegan"),
        )
        .with_tags(["Vegan Catering"])
        .with_patterns(["dietary-inclusive"]),
        InferenceRule::new(
            "entertainer",
            Condition::field_contains(fields::SERVICES, "music-dj"),
        )
        .with_tags(["DJ Services", "Live Entertainment"])
        .with_patterns(["entertainment-provider"]),
        InferenceRule::new(
            "corporate-vendor",
            Condition::field_contains(fields::EVENT_TYPES, "corporate"),
        )
        .with_tags(["Corporate Events"])
        .with_patterns(["b2b-oriented"]),
        InferenceRule::new(
            "value-market",
            Condition::field_equals(fields::PRICE_TIER, "budget"),
        )
        .with_tags(["Budget Friendly"])
        .with_patterns(["value-market"]),
    ]
}

// ============================================================================
// Organizer rules
// ============================================================================

fn organizer_rules() -> Vec<InferenceRule> {
    vec![
        InferenceRule::new(
            "corporate-planner",
            Condition::field_equals(fields::ORGANIZATION_TYPE, "corporate"),
        )
        .with_tags(["Corporate Events", "Conference Venues"])
        .with_patterns(["corporate-planner"]),
        InferenceRule::new(
            "nonprofit-planner",
            Condition::field_equals(fields::ORGANIZATION_TYPE, "nonprofit"),
        )
        .with_tags(["Fundraisers", "Community Events"])
        .with_patterns(["mission-driven"]),
        InferenceRule::new(
            "agency-operator",
            Condition::field_equals(fields::ORGANIZATION_TYPE, "agency"),
        )
        .with_tags(["Brand Activations"])
        .with_patterns(["agency-operator"]),
        InferenceRule::new(
            "large-scale",
            Condition::AnyOf(vec![
                Condition::field_equals(fields::EVENT_SCALE, "large"),
                Condition::field_equals(fields::EVENT_SCALE, "massive"),
            ]),
        )
        .with_tags(["Large Scale Production"])
        .with_patterns(["high-volume-organizer"]),
        InferenceRule::new(
            "festival-scale",
            Condition::field_equals(fields::EVENT_SCALE, "massive"),
        )
        .with_tags(["Festival Infrastructure"])
        .with_patterns(["high-volume-organizer"]),
        InferenceRule::new(
            "boutique",
            Condition::field_equals(fields::EVENT_SCALE, "intimate"),
        )
        .with_tags(["Boutique Events"])
        .with_patterns(["detail-oriented"]),
        InferenceRule::new(
            "always-on",
            Condition::field_equals(fields::EVENT_FREQUENCY, "monthly"),
        )
        .with_tags(["Recurring Events"])
        .with_patterns(["always-on-organizer"]),
        InferenceRule::new(
            "needs-vendor-matching",
            Condition::field_contains(fields::SUPPORT_NEEDS, "vendor-sourcing"),
        )
        .with_tags(["Vendor Matching"])
        .with_patterns(["delegation-oriented"]),
        InferenceRule::new(
            "needs-promotion",
            Condition::field_contains(fields::SUPPORT_NEEDS, "marketing"),
        )
        .with_tags(["Event Promotion"])
        .with_patterns(["growth-focused"]),
        InferenceRule::new(
            "needs-logistics",
            Condition::field_contains(fields::SUPPORT_NEEDS, "logistics"),
        )
        .with_tags(["Logistics Support"])
        .with_patterns(["operations-minded"]),
    ]
}
