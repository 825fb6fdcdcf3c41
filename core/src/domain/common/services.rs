use std::sync::Arc;

use crate::domain::{
    common::RecipeConfig,
    health::ports::HealthCheckRepository,
    pantry::ports::PantryItemRepository,
    recipe::ports::{RecipeLLMClient, RecipeRepository},
    trigger::{ports::TriggerStateRepository, session::TriggerSessions},
    user_profile::ports::UserProfileRepository,
};

/// Shared service container. Each domain context implements its service
/// trait on this type, so one value serves the whole application.
pub struct Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    pub(crate) pantry_repository: Arc<P>,
    pub(crate) recipe_repository: Arc<R>,
    pub(crate) trigger_state_repository: Arc<T>,
    pub(crate) user_profile_repository: Arc<UP>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) sessions: Arc<TriggerSessions>,
    pub(crate) recipe_config: RecipeConfig,
}

impl<P, R, T, UP, HC, LLM> Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pantry_repository: P,
        recipe_repository: R,
        trigger_state_repository: T,
        user_profile_repository: UP,
        health_check_repository: HC,
        llm_client: LLM,
        recipe_config: RecipeConfig,
    ) -> Self {
        Self {
            pantry_repository: Arc::new(pantry_repository),
            recipe_repository: Arc::new(recipe_repository),
            trigger_state_repository: Arc::new(trigger_state_repository),
            user_profile_repository: Arc::new(user_profile_repository),
            health_check_repository: Arc::new(health_check_repository),
            llm_client: Arc::new(llm_client),
            sessions: Arc::new(TriggerSessions::default()),
            recipe_config,
        }
    }
}

impl<P, R, T, UP, HC, LLM> Clone for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    fn clone(&self) -> Self {
        Self {
            pantry_repository: Arc::clone(&self.pantry_repository),
            recipe_repository: Arc::clone(&self.recipe_repository),
            trigger_state_repository: Arc::clone(&self.trigger_state_repository),
            user_profile_repository: Arc::clone(&self.user_profile_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            llm_client: Arc::clone(&self.llm_client),
            sessions: Arc::clone(&self.sessions),
            recipe_config: self.recipe_config.clone(),
        }
    }
}
