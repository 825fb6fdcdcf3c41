use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserProfileValidator {
    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "household_size must be between 1 and 50"))]
    pub household_size: Option<u32>,

    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 dietary preferences"))]
    pub dietary_preferences: Option<Vec<String>>,

    #[serde(default)]
    #[validate(length(max = 255, message = "cooking_style must be at most 255 characters"))]
    pub cooking_style: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "at most 20 cooking goals"))]
    pub cooking_goals: Option<Vec<String>>,

    #[serde(default)]
    pub onboarding_completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use shelflife_core::domain::user_profile::entities::UserProfile;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_onboarding_payload() {
        let payload: UpdateUserProfileValidator = serde_json::from_str(
            r#"{
                "household_size": 3,
                "dietary_preferences": ["Vegetarian"],
                "cooking_style": "Quick & Easy",
                "cooking_goals": ["Reduce waste"],
                "onboarding_completed": true
            }"#,
        )
        .unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.household_size, Some(3));
        assert_eq!(payload.onboarding_completed, Some(true));
    }

    #[test]
    fn test_profile_returned_by_get_can_be_sent_back() {
        let mut profile = UserProfile::empty(Uuid::new_v4());
        profile.household_size = 4;
        profile.cooking_goals = vec!["Save money".to_string()];
        let body = serde_json::to_string(&profile).unwrap();

        let payload: UpdateUserProfileValidator = serde_json::from_str(&body).unwrap();

        assert_eq!(payload.household_size, Some(4));
        assert_eq!(payload.cooking_goals, Some(vec!["Save money".to_string()]));
        assert_eq!(payload.onboarding_completed, Some(false));
    }

    #[test]
    fn test_zero_household_rejected() {
        let payload = UpdateUserProfileValidator {
            household_size: Some(0),
            ..Default::default()
        };

        assert!(payload.validate().is_err());
    }
}
