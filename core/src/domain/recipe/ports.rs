use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::entities::PantryItem,
    recipe::{
        entities::{GeneratedRecipe, RecipeClick},
        value_objects::{GenerationParameters, RecipeBatch, RecordRecipeClickInput},
    },
    user_profile::entities::UserProfile,
};

/// Repository trait for generated recipes and recipe clicks
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Most recent first.
    fn get_recipes(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;

    fn save_recipe(
        &self,
        recipe: GeneratedRecipe,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn save_recipe_click(
        &self,
        click: RecipeClick,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Structured-output text generation. Returns the raw response text.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeLLMClient: Send + Sync {
    fn generate_recipes(
        &self,
        prompt: String,
        schema: serde_json::Value,
        parameters: GenerationParameters,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation and history
pub trait RecipeService: Send + Sync {
    /// Run the generation pipeline. Never fails: any generation error
    /// yields the fallback batch.
    fn generate_recipes(
        &self,
        user_id: Uuid,
        urgent_items: Vec<PantryItem>,
        profile: Option<UserProfile>,
    ) -> impl Future<Output = RecipeBatch> + Send;

    fn list_recipes(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<GeneratedRecipe>, CoreError>> + Send;

    /// Click tracking is best effort; storage errors are logged, not returned.
    fn record_recipe_click(
        &self,
        user_id: Uuid,
        input: RecordRecipeClickInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
