use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user_profile::{entities::UserProfile, ports::UserProfileRepository},
    },
    entity::user_profiles::{ActiveModel, Column, Entity},
    infrastructure::db::strings_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresUserProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserProfileRepository for PostgresUserProfileRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let profile = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load user profile: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(profile.map(UserProfile::from))
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let household_size = i32::try_from(profile.household_size)
            .map_err(|_| CoreError::Invalid("household size is too large".to_string()))?;

        let active_model = ActiveModel {
            user_id: Set(profile.user_id),
            household_size: Set(household_size),
            dietary_preferences: Set(strings_to_json(&profile.dietary_preferences)),
            cooking_style: Set(profile.cooking_style.clone()),
            cooking_goals: Set(strings_to_json(&profile.cooking_goals)),
            onboarding_completed: Set(profile.onboarding_completed),
            updated_at: Set(profile.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::HouseholdSize,
                        Column::DietaryPreferences,
                        Column::CookingStyle,
                        Column::CookingGoals,
                        Column::OnboardingCompleted,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save user profile: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(UserProfile::from(saved))
    }
}
