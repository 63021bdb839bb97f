use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::item::Category;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    #[serde(default)]
    pub browsing_history: Vec<String>,
    #[serde(default)]
    pub purchase_history: Vec<String>,
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), ..Self::default() }
    }

    pub fn with_browsed(mut self, category: impl Into<String>) -> Self {
        self.browsing_history.push(category.into());
        self
    }

    pub fn with_purchased(mut self, category: impl Into<String>) -> Self {
        self.purchase_history.push(category.into());
        self
    }

    pub fn interest(&self) -> CategoryInterest {
        CategoryInterest::from_profile(self)
    }
}

/// Set view over a profile's browsed and purchased categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryInterest {
    browsed: HashSet<String>,
    purchased: HashSet<String>,
}

impl CategoryInterest {
    pub const PURCHASED_MULTIPLIER: f64 = 1.5;
    pub const BROWSED_MULTIPLIER: f64 = 1.2;
    pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            browsed: profile.browsing_history.iter().cloned().collect(),
            purchased: profile.purchase_history.iter().cloned().collect(),
        }
    }

    pub fn browsed(&self, category: Category) -> bool {
        self.browsed.contains(category.as_str())
    }

    pub fn purchased(&self, category: Category) -> bool {
        self.purchased.contains(category.as_str())
    }

    /// Purchase history outranks browsing history.
    pub fn multiplier(&self, category: Category) -> f64 {
        if self.purchased(category) {
            Self::PURCHASED_MULTIPLIER
        } else if self.browsed(category) {
            Self::BROWSED_MULTIPLIER
        } else {
            Self::NEUTRAL_MULTIPLIER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryInterest, UserProfile};
    use crate::domain::item::Category;

    #[test]
    fn purchase_history_takes_precedence_over_browsing() {
        let interest = UserProfile::new("u-1")
            .with_browsed("electronics")
            .with_purchased("electronics")
            .interest();

        assert_eq!(interest.multiplier(Category::Electronics), 1.5);
    }

    #[test]
    fn browsing_only_yields_browsed_multiplier() {
        let interest = UserProfile::new("u-2").with_browsed("home").with_browsed("home").interest();

        assert_eq!(interest.multiplier(Category::Home), 1.2);
        assert_eq!(interest.multiplier(Category::Office), CategoryInterest::NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn profile_deserializes_with_missing_histories() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id":"anon"}"#).expect("minimal profile");

        assert!(profile.browsing_history.is_empty());
        assert!(profile.purchase_history.is_empty());
        assert!(profile.preferences.is_empty());
    }
}
