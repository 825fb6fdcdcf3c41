use uuid::Uuid;

use crate::domain::recipe::{
    entities::{DEFAULT_ESTIMATED_TIME, Difficulty, GeneratedRecipe, GeneratedRecipeConfig},
    value_objects::RecipeDraft,
};

/// Recipes kept from one model response.
pub const MAX_RECIPES_PER_BATCH: usize = 3;

/// Rewrite the serving text to "Serves N" for households larger than one,
/// unless the model already mentions that number.
pub fn adjust_serving_size(serving_size: &str, household_size: Option<u32>) -> String {
    match household_size {
        Some(size) if size > 1 && !serving_size.contains(&size.to_string()) => {
            format!("Serves {size}")
        }
        _ => serving_size.to_string(),
    }
}

/// Turn model drafts into recipes: at most three, with default time and
/// difficulty, adjusted serving text and shared provenance.
pub fn create_recipes_from_drafts(
    user_id: Uuid,
    drafts: Vec<RecipeDraft>,
    household_size: Option<u32>,
    triggered_by: &[String],
) -> Vec<GeneratedRecipe> {
    drafts
        .into_iter()
        .take(MAX_RECIPES_PER_BATCH)
        .map(|draft| {
            GeneratedRecipe::new(GeneratedRecipeConfig {
                user_id,
                serving_size: adjust_serving_size(&draft.serving_size, household_size),
                recipe_name: draft.recipe_name,
                description: draft.description,
                ingredients: draft.ingredients,
                instructions: draft.instructions,
                estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
                difficulty: Difficulty::Easy,
                triggered_by: triggered_by.to_vec(),
            })
        })
        .collect()
}

/// Lowercase, with each whitespace run replaced by a single hyphen.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
