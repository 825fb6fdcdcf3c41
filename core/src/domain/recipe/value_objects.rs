use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::RecipeConfig, recipe::entities::GeneratedRecipe};

/// One recipe as the model returns it, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub recipe_name: String,
    pub description: String,
    pub serving_size: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Sampling settings forwarded to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl From<&RecipeConfig> for GenerationParameters {
    fn from(config: &RecipeConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    Generated,
    /// Built-in templates, shown when generation failed.
    Fallback,
}

impl RecipeSource {
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            RecipeSource::Generated => None,
            RecipeSource::Fallback => {
                Some("Recipe suggestions are temporarily limited. Showing simple ideas instead.")
            }
        }
    }
}

/// Result of one pipeline run. Always holds at least one recipe.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeBatch {
    pub recipes: Vec<GeneratedRecipe>,
    pub source: RecipeSource,
    /// Recipes durably stored from this batch; fallbacks are never stored.
    pub persisted_count: usize,
    pub notice: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecipeBatch {
    pub fn generated(recipes: Vec<GeneratedRecipe>, persisted_count: usize) -> Self {
        Self {
            recipes,
            source: RecipeSource::Generated,
            persisted_count,
            notice: None,
            generated_at: Utc::now(),
        }
    }

    pub fn fallback(recipes: Vec<GeneratedRecipe>) -> Self {
        Self {
            recipes,
            source: RecipeSource::Fallback,
            persisted_count: 0,
            notice: RecipeSource::Fallback.notice().map(str::to_string),
            generated_at: Utc::now(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == RecipeSource::Fallback
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRecipeClickInput {
    pub recipe_name: String,
}
