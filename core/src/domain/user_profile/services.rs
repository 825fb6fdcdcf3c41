use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryItemRepository,
    recipe::ports::{RecipeLLMClient, RecipeRepository},
    trigger::ports::TriggerStateRepository,
    user_profile::{
        entities::UserProfile,
        ports::{UserProfileRepository, UserProfileService},
        value_objects::UpdateUserProfileInput,
    },
};

impl<P, R, T, UP, HC, LLM> UserProfileService for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    async fn get_profile(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        let profile = self.user_profile_repository.get(user_id).await?;

        Ok(profile.unwrap_or_else(|| UserProfile::empty(user_id)))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        input: UpdateUserProfileInput,
    ) -> Result<UserProfile, CoreError> {
        if input.household_size == Some(0) {
            return Err(CoreError::Invalid(
                "household size must be at least 1".to_string(),
            ));
        }

        let mut profile = self.get_profile(user_id).await?;
        profile.apply(input);

        let profile = self.user_profile_repository.upsert(profile).await?;
        info!(%user_id, onboarding_completed = profile.onboarding_completed, "profile updated");

        Ok(profile)
    }
}
