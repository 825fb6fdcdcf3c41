use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{RecipeConfig, entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    pantry::{entities::PantryItem, ports::PantryItemRepository},
    recipe::{
        entities::{GeneratedRecipe, RecipeClick},
        fallback::build_fallback_recipes,
        helpers::create_recipes_from_drafts,
        parser::{ParsedRecipes, parse_recipe_response},
        ports::{RecipeLLMClient, RecipeRepository, RecipeService},
        prompt::build_recipe_prompt,
        schema::get_recipe_schema,
        value_objects::{GenerationParameters, RecipeBatch, RecipeDraft, RecordRecipeClickInput},
    },
    trigger::ports::TriggerStateRepository,
    user_profile::{entities::UserProfile, ports::UserProfileRepository},
};

const MAX_RECIPE_HISTORY_LIMIT: u64 = 100;

impl<P, R, T, UP, HC, LLM> RecipeService for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    #[instrument(skip(self, urgent_items, profile), fields(urgent = urgent_items.len()))]
    async fn generate_recipes(
        &self,
        user_id: Uuid,
        urgent_items: Vec<PantryItem>,
        profile: Option<UserProfile>,
    ) -> RecipeBatch {
        let triggered_by: Vec<String> = urgent_items.iter().map(|item| item.name.clone()).collect();
        let prompt = build_recipe_prompt(&urgent_items, profile.as_ref());

        match request_drafts(self.llm_client.as_ref(), &self.recipe_config, prompt).await {
            Ok(drafts) => {
                let household_size = profile.as_ref().map(|profile| profile.household_size);
                let recipes =
                    create_recipes_from_drafts(user_id, drafts, household_size, &triggered_by);
                let persisted_count =
                    persist_recipes(self.recipe_repository.as_ref(), &recipes).await;

                info!(
                    recipes = recipes.len(),
                    persisted = persisted_count,
                    "recipes generated"
                );
                RecipeBatch::generated(recipes, persisted_count)
            }
            Err(e) => {
                if e.is_generation_failure() {
                    warn!(error = %e, "recipe generation failed, serving fallback recipes");
                } else {
                    warn!(error = %e, "unexpected error during recipe generation, serving fallback recipes");
                }

                RecipeBatch::fallback(build_fallback_recipes(
                    user_id,
                    profile.as_ref(),
                    &triggered_by,
                ))
            }
        }
    }

    async fn list_recipes(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let limit = limit
            .unwrap_or(self.recipe_config.recipe_history_limit)
            .clamp(1, MAX_RECIPE_HISTORY_LIMIT);

        self.recipe_repository.get_recipes(user_id, limit).await
    }

    async fn record_recipe_click(
        &self,
        user_id: Uuid,
        input: RecordRecipeClickInput,
    ) -> Result<(), CoreError> {
        let recipe_name = input.recipe_name.trim().to_string();
        if recipe_name.is_empty() {
            return Err(CoreError::Invalid("recipe name is required".to_string()));
        }

        let click = RecipeClick::new(user_id, recipe_name);
        if let Err(e) = self.recipe_repository.save_recipe_click(click).await {
            warn!(error = %e, %user_id, "failed to record recipe click");
        }

        Ok(())
    }
}

/// One bounded call to the model plus schema validation. The timeout
/// cancels the in-flight request.
async fn request_drafts<LLM: RecipeLLMClient>(
    client: &LLM,
    config: &RecipeConfig,
    prompt: String,
) -> Result<Vec<RecipeDraft>, CoreError> {
    let call = client.generate_recipes(
        prompt,
        get_recipe_schema(),
        GenerationParameters::from(config),
    );

    let raw = tokio::time::timeout(config.generation_timeout, call)
        .await
        .map_err(|_| {
            CoreError::Transport(format!(
                "recipe generation timed out after {}s",
                config.generation_timeout.as_secs()
            ))
        })??;

    match parse_recipe_response(&raw) {
        ParsedRecipes::Ok(drafts) => Ok(drafts),
        ParsedRecipes::SchemaError(reason) => Err(CoreError::MalformedResponse(reason)),
        ParsedRecipes::EmptyError => Err(CoreError::MalformedResponse(
            "no recipes in response".to_string(),
        )),
    }
}

/// Save recipes in order, stopping at the first failure. Returns how many
/// were stored.
async fn persist_recipes<R: RecipeRepository>(
    repository: &R,
    recipes: &[GeneratedRecipe],
) -> usize {
    let mut persisted = 0;

    for recipe in recipes {
        if let Err(e) = repository.save_recipe(recipe.clone()).await {
            warn!(
                error = %e,
                recipe = %recipe.recipe_name,
                persisted,
                "failed to persist generated recipe"
            );
            break;
        }
        persisted += 1;
    }

    persisted
}
