use crate::{
    domain::user_profile::entities::UserProfile, entity::user_profiles,
    infrastructure::db::strings_from_json,
};

impl From<user_profiles::Model> for UserProfile {
    fn from(model: user_profiles::Model) -> Self {
        Self {
            user_id: model.user_id,
            household_size: u32::try_from(model.household_size).unwrap_or(1).max(1),
            dietary_preferences: strings_from_json(&model.dietary_preferences),
            cooking_style: model.cooking_style,
            cooking_goals: strings_from_json(&model.cooking_goals),
            onboarding_completed: model.onboarding_completed,
            updated_at: model.updated_at.to_utc(),
        }
    }
}
