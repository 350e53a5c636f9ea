//! User category - the top-level user type that gates question branches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three kinds of marketplace users the onboarding flow serves.
///
/// Set by exactly one distinguished first question and never re-asked or
/// overwritten afterward. Each category has its own question branch and its
/// own inference rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCategory {
    /// Attends events and books vendors.
    Customer,
    /// Offers services (photography, catering, music, ...).
    Vendor,
    /// Plans and runs events professionally.
    Organizer,
}

impl UserCategory {
    /// All categories, in catalog option order.
    pub fn all() -> [Self; 3] {
        [Self::Customer, Self::Vendor, Self::Organizer]
    }

    /// The option value used by the category question for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Organizer => "organizer",
        }
    }

    /// Parses a category from a recorded answer value.
    pub fn from_answer(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(Self::Customer),
            "vendor" => Some(Self::Vendor),
            "organizer" => Some(Self::Organizer),
            _ => None,
        }
    }
}

impl fmt::Display for UserCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_answer_parses_all_variants() {
        for category in UserCategory::all() {
            assert_eq!(UserCategory::from_answer(category.as_str()), Some(category));
        }
    }

    #[test]
    fn category_from_answer_rejects_unknown_values() {
        assert_eq!(UserCategory::from_answer("admin"), None);
        assert_eq!(UserCategory::from_answer(""), None);
        assert_eq!(UserCategory::from_answer("Customer"), None);
    }

    #[test]
    fn category_serializes_to_snake_case() {
        let json = serde_json::to_string(&UserCategory::Organizer).unwrap();
        assert_eq!(json, "\"organizer\"");
    }
}
