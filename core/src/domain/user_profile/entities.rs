use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user_profile::value_objects::UpdateUserProfileInput;

/// Dietary preference meaning "nothing to filter"; never sent to the model.
pub const NO_RESTRICTIONS: &str = "No restrictions";

/// Onboarding answers. Read by the recipe pipeline, written only through the
/// profile service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub household_size: u32,
    pub dietary_preferences: Vec<String>,
    pub cooking_style: Option<String>,
    pub cooking_goals: Vec<String>,
    pub onboarding_completed: bool,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile of a user who has not finished onboarding.
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            household_size: 1,
            dietary_preferences: Vec::new(),
            cooking_style: None,
            cooking_goals: Vec::new(),
            onboarding_completed: false,
            updated_at: Utc::now(),
        }
    }

    pub fn has_dietary_preference(&self, preference: &str) -> bool {
        self.dietary_preferences
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(preference))
    }

    /// Dietary preferences minus the "No restrictions" sentinel.
    pub fn dietary_requirements(&self) -> Vec<String> {
        self.dietary_preferences
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case(NO_RESTRICTIONS))
            .map(str::to_string)
            .collect()
    }

    pub fn apply(&mut self, input: UpdateUserProfileInput) {
        if let Some(household_size) = input.household_size {
            self.household_size = household_size;
        }
        if let Some(preferences) = input.dietary_preferences {
            self.dietary_preferences = normalize_list(preferences);
        }
        if let Some(style) = input.cooking_style {
            let style = style.trim().to_string();
            self.cooking_style = (!style.is_empty()).then_some(style);
        }
        if let Some(goals) = input.cooking_goals {
            self.cooking_goals = normalize_list(goals);
        }
        if let Some(completed) = input.onboarding_completed {
            self.onboarding_completed = completed;
        }
        self.updated_at = Utc::now();
    }
}

/// Trimmed, non-empty, first occurrence wins (case-insensitive).
fn normalize_list(values: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(values.len());

    for value in values {
        let value = value.trim();
        if value.is_empty() || normalized.iter().any(|v| v.eq_ignore_ascii_case(value)) {
            continue;
        }
        normalized.push(value.to_string());
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_excluded_from_requirements() {
        let mut profile = UserProfile::empty(Uuid::nil());
        profile.dietary_preferences = vec!["no restrictions".into(), "Vegan".into()];

        assert_eq!(profile.dietary_requirements(), vec!["Vegan"]);
        assert!(profile.has_dietary_preference("vegan"));
        assert!(!profile.has_dietary_preference("Gluten-free"));
    }

    #[test]
    fn test_apply_partial_update() {
        let mut profile = UserProfile::empty(Uuid::nil());

        profile.apply(UpdateUserProfileInput {
            household_size: Some(3),
            dietary_preferences: Some(vec![" Vegan ".into(), "vegan".into(), "".into()]),
            cooking_style: Some("  ".into()),
            ..Default::default()
        });

        assert_eq!(profile.household_size, 3);
        assert_eq!(profile.dietary_preferences, vec!["Vegan"]);
        assert_eq!(profile.cooking_style, None);
        assert!(!profile.onboarding_completed);
    }
}
