//! The production onboarding catalog.
//!
//! One category-selection question followed by three branches, one per user
//! category. Branch membership is expressed through `CategoryIs` conditions;
//! deeper branching (follow-up questions) layers additional conditions on
//! top. Question ids double as profile field names and are kept in the
//! camelCase form the rest of the marketplace stack uses.

use once_cell::sync::Lazy;

use super::{Condition, Question, QuestionCatalog, QuestionOption, CATEGORY_QUESTION_ID};
use crate::domain::foundation::UserCategory;

/// Well-known profile field names populated by the default catalog.
pub mod fields {
    pub const CATEGORY: &str = super::CATEGORY_QUESTION_ID;

    // Customer branch
    pub const INTERESTS: &str = "interests";
    pub const FAVORITE_ARTISTS: &str = "favoriteArtists";
    pub const PREFERRED_VIBE: &str = "preferredVibe";
    pub const LOCATION_PREFERENCE: &str = "locationPreference";
    pub const PURPOSE: &str = "purpose";
    pub const BUDGET_RANGE: &str = "budgetRange";

    // Vendor branch
    pub const SERVICES: &str = "services";
    pub const EVENT_TYPES: &str = "eventTypes";
    pub const TARGET_AUDIENCE: &str = "targetAudience";
    pub const CUISINE_STYLES: &str = "cuisineStyles";
    pub const PRICE_TIER: &str = "priceTier";

    // Organizer branch
    pub const ORGANIZATION_TYPE: &str = "organizationType";
    pub const EVENT_SCALE: &str = "eventScale";
    pub const EVENT_FREQUENCY: &str = "eventFrequency";
    pub const SUPPORT_NEEDS: &str = "supportNeeds";
}

static DEFAULT_CATALOG: Lazy<QuestionCatalog> = Lazy::new(|| {
    let mut questions = vec![category_question()];
    questions.extend(customer_branch());
    questions.extend(vendor_branch());
    questions.extend(organizer_branch());
    QuestionCatalog::new(questions).expect("default catalog must satisfy structural rules")
});

/// Returns the production catalog.
pub fn default_catalog() -> &'static QuestionCatalog {
    &DEFAULT_CATALOG
}

fn category_question() -> Question {
    Question::single_choice(
        CATEGORY_QUESTION_ID,
        "Welcome to Eventide! What brings you here?",
        vec![
            QuestionOption::new("customer", "I'm looking for events to attend")
                .with_description("Discover concerts, festivals and more")
                .with_icon("🎉"),
            QuestionOption::new("vendor", "I offer event services")
                .with_description("Photography, catering, music and beyond")
                .with_icon("📸"),
            QuestionOption::new("organizer", "I organize events professionally")
                .with_description("Plan, staff and run events at any scale")
                .with_icon("📋"),
        ],
    )
}

// ============================================================================
// Customer branch
// ============================================================================

fn customer_branch() -> Vec<Question> {
    let customer = Condition::CategoryIs(UserCategory::Customer);

    vec![
        Question::multi_choice(
            fields::INTERESTS,
            "What kinds of events get you excited?",
            vec![
                QuestionOption::new("concerts", "Concerts").with_icon("🎤"),
                QuestionOption::new("festivals", "Festivals").with_icon("🎪"),
                QuestionOption::new("sports", "Sports").with_icon("🏟️"),
                QuestionOption::new("theater", "Theater & Shows").with_icon("🎭"),
                QuestionOption::new("art-exhibitions", "Art Exhibitions").with_icon("🖼️"),
                QuestionOption::new("food-events", "Food Events").with_icon("🍷"),
            ],
        )
        .when(customer.clone())
        .with_analysis_note("Interests seed the recommendation tags directly"),
        Question::multi_choice(
            fields::FAVORITE_ARTISTS,
            "Any artists you'd travel to see?",
            vec![
                QuestionOption::new("Coldplay", "Coldplay"),
                QuestionOption::new("Taylor Swift", "Taylor Swift"),
                QuestionOption::new("Arctic Monkeys", "Arctic Monkeys"),
                QuestionOption::new("Billie Eilish", "Billie Eilish"),
                QuestionOption::new("The Weeknd", "The Weeknd"),
                QuestionOption::new("Local Indie Acts", "Local indie acts"),
            ],
        )
        .when(customer.clone().and(Condition::AnyOf(vec![
            Condition::field_contains(fields::INTERESTS, "concerts"),
            Condition::field_contains(fields::INTERESTS, "festivals"),
        ]))),
        Question::single_choice(
            fields::PREFERRED_VIBE,
            "What's your ideal event vibe?",
            vec![
                QuestionOption::new("chill-outdoor", "Chill & outdoors")
                    .with_description("Open air, relaxed pace"),
                QuestionOption::new("energetic-indoor", "Energetic & indoors")
                    .with_description("Clubs, arenas, big sound"),
                QuestionOption::new("intimate-venue", "Intimate venues")
                    .with_description("Small rooms, close to the stage"),
                QuestionOption::new("grand-stage", "Grand productions")
                    .with_description("Stadium shows and spectacles"),
            ],
        )
        .when(customer.clone()),
        Question::single_choice(
            fields::LOCATION_PREFERENCE,
            "How far would you go for the right event?",
            vec![
                QuestionOption::new("local", "Around my city"),
                QuestionOption::new("regional", "Within my region"),
                QuestionOption::new("international", "Anywhere in the world"),
            ],
        )
        .when(customer.clone()),
        Question::single_choice(
            fields::PURPOSE,
            "What do events mean to you, mostly?",
            vec![
                QuestionOption::new("social", "Time with friends"),
                QuestionOption::new("explore-travel", "Exploring & traveling"),
                QuestionOption::new("networking", "Meeting new people professionally"),
                QuestionOption::new("family-time", "Family time"),
            ],
        )
        .when(customer.clone()),
        Question::single_choice(
            fields::BUDGET_RANGE,
            "What do you usually spend on a ticket?",
            vec![
                QuestionOption::new("budget-friendly", "Keep it affordable"),
                QuestionOption::new("mid-range", "Mid-range is fine"),
                QuestionOption::new("premium", "Premium for the right show"),
            ],
        )
        .when(customer),
    ]
}

// ============================================================================
// Vendor branch
// ============================================================================

fn vendor_branch() -> Vec<Question> {
    let vendor = Condition::CategoryIs(UserCategory::Vendor);

    vec![
        Question::multi_choice(
            fields::SERVICES,
            "Which services do you offer?",
            vec![
                QuestionOption::new("photography", "Photography").with_icon("📷"),
                QuestionOption::new("catering", "Catering").with_icon("🍽️"),
                QuestionOption::new("music-dj", "Music & DJ").with_icon("🎧"),
                QuestionOption::new("decor", "Decor & Styling").with_icon("💐"),
                QuestionOption::new("venue", "Venue Rental").with_icon("🏛️"),
                QuestionOption::new("event-planning", "Event Planning").with_icon("🗓️"),
            ],
        )
        .when(vendor.clone()),
        Question::multi_choice(
            fields::EVENT_TYPES,
            "Which event types do you serve most?",
            vec![
                QuestionOption::new("weddings", "Weddings"),
                QuestionOption::new("corporate", "Corporate events"),
                QuestionOption::new("birthdays", "Birthdays"),
                QuestionOption::new("festivals", "Festivals"),
                QuestionOption::new("private-parties", "Private parties"),
            ],
        )
        .when(vendor.clone()),
        Question::free_text(
            fields::TARGET_AUDIENCE,
            "Describe your ideal client and signature style.",
        )
        .when(vendor.clone())
        .with_analysis_note("Free text is scanned for style and market keywords"),
        Question::multi_choice(
            fields::CUISINE_STYLES,
            "Which cuisines do you cater?",
            vec![
                QuestionOption::new("italian", "Italian"),
                QuestionOption::new("asian-fusion", "Asian fusion"),
                QuestionOption::new("bbq", "BBQ & grill"),
                QuestionOption::new("vegan", "Vegan & plant-based"),
                QuestionOption::new("fine-dining", "Fine dining"),
            ],
        )
        .when(
            vendor
                .clone()
                .and(Condition::field_contains(fields::SERVICES, "catering")),
        ),
        Question::single_choice(
            fields::PRICE_TIER,
            "Where does your pricing sit?",
            vec![
                QuestionOption::new("budget", "Budget friendly"),
                QuestionOption::new("mid-range", "Mid-range"),
                QuestionOption::new("luxury", "Luxury"),
            ],
        )
        .when(vendor),
    ]
}

// ============================================================================
// Organizer branch
// ============================================================================

fn organizer_branch() -> Vec<Question> {
    let organizer = Condition::CategoryIs(UserCategory::Organizer);

    vec![
        Question::single_choice(
            fields::ORGANIZATION_TYPE,
            "What kind of organization do you plan for?",
            vec![
                QuestionOption::new("corporate", "A company or corporation"),
                QuestionOption::new("nonprofit", "A nonprofit"),
                QuestionOption::new("agency", "An events agency"),
                QuestionOption::new("independent", "Just me — independent"),
            ],
        )
        .when(organizer.clone()),
        Question::single_choice(
            fields::EVENT_SCALE,
            "What scale are your typical events?",
            vec![
                QuestionOption::new("intimate", "Intimate (under 50 guests)"),
                QuestionOption::new("medium", "Medium (50-300 guests)"),
                QuestionOption::new("large", "Large (300-2000 guests)"),
                QuestionOption::new("massive", "Massive (2000+ guests)"),
            ],
        )
        .when(organizer.clone()),
        Question::single_choice(
            fields::EVENT_FREQUENCY,
            "How often do you run events?",
            vec![
                QuestionOption::new("monthly", "Monthly or more"),
                QuestionOption::new("quarterly", "Quarterly"),
                QuestionOption::new("few-times-a-year", "A few times a year"),
                QuestionOption::new("one-off", "One-off projects"),
            ],
        )
        .when(organizer.clone()),
        Question::multi_choice(
            fields::SUPPORT_NEEDS,
            "Where could Eventide help you most?",
            vec![
                QuestionOption::new("vendor-sourcing", "Finding vendors"),
                QuestionOption::new("budgeting", "Budgeting"),
                QuestionOption::new("marketing", "Marketing & promotion"),
                QuestionOption::new("logistics", "Logistics"),
                QuestionOption::new("staffing", "Staffing"),
            ],
        )
        .when(organizer),
    ]
}
