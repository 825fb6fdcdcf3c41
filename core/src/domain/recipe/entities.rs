use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, recipe::helpers::slugify};

pub const DEFAULT_ESTIMATED_TIME: &str = "20-30 min";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

/// A recipe suggestion. Immutable once created; `triggered_by` records the
/// pantry item names that caused it (sorted, no duplicates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_name: String,
    pub description: String,
    pub serving_size: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub triggered_by: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GeneratedRecipeConfig {
    pub user_id: Uuid,
    pub recipe_name: String,
    pub description: String,
    pub serving_size: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub estimated_time: String,
    pub difficulty: Difficulty,
    pub triggered_by: Vec<String>,
}

impl GeneratedRecipe {
    pub fn new(config: GeneratedRecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        let mut triggered_by = config.triggered_by;
        triggered_by.sort();
        triggered_by.dedup();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            recipe_name: config.recipe_name,
            description: config.description,
            serving_size: config.serving_size,
            ingredients: config.ingredients,
            instructions: config.instructions,
            estimated_time: config.estimated_time,
            difficulty: config.difficulty,
            triggered_by,
            created_at: now,
        }
    }

    /// URL slug for the recipe detail page.
    pub fn slug(&self) -> String {
        slugify(&self.recipe_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeClick {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_name: String,
    pub clicked_at: DateTime<Utc>,
}

impl RecipeClick {
    pub fn new(user_id: Uuid, recipe_name: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            recipe_name,
            clicked_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_triggered_by_is_a_set() {
        let recipe = GeneratedRecipe::new(GeneratedRecipeConfig {
            user_id: Uuid::nil(),
            recipe_name: "Spinach Omelette".to_string(),
            description: "Eggs and greens".to_string(),
            serving_size: "Serves 2".to_string(),
            ingredients: vec!["Eggs".to_string()],
            instructions: vec!["Whisk".to_string()],
            estimated_time: DEFAULT_ESTIMATED_TIME.to_string(),
            difficulty: Difficulty::Easy,
            triggered_by: vec!["Spinach".into(), "Milk".into(), "Spinach".into()],
        });

        assert_eq!(recipe.triggered_by, vec!["Milk", "Spinach"]);
        assert_eq!(recipe.slug(), "spinach-omelette");
    }
}
