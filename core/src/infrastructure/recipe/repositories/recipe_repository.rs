use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{GeneratedRecipe, RecipeClick},
            ports::RecipeRepository,
        },
    },
    entity::{
        recipe_clicks::{ActiveModel as ClickActiveModel, Entity as ClickEntity},
        recipes::{ActiveModel, Column, Entity},
    },
    infrastructure::db::strings_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn get_recipes(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let recipes = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(recipes.into_iter().map(GeneratedRecipe::from).collect())
    }

    async fn save_recipe(&self, recipe: GeneratedRecipe) -> Result<GeneratedRecipe, CoreError> {
        let active_model = ActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            recipe_name: Set(recipe.recipe_name.clone()),
            description: Set(recipe.description.clone()),
            serving_size: Set(recipe.serving_size.clone()),
            ingredients: Set(strings_to_json(&recipe.ingredients)),
            instructions: Set(strings_to_json(&recipe.instructions)),
            estimated_time: Set(recipe.estimated_time.clone()),
            difficulty: Set(recipe.difficulty.to_string()),
            triggered_by: Set(strings_to_json(&recipe.triggered_by)),
            created_at: Set(recipe.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save recipe: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(GeneratedRecipe::from(created))
    }

    async fn save_recipe_click(&self, click: RecipeClick) -> Result<(), CoreError> {
        let active_model = ClickActiveModel {
            id: Set(click.id),
            user_id: Set(click.user_id),
            recipe_name: Set(click.recipe_name),
            clicked_at: Set(click.clicked_at.fixed_offset()),
        };

        ClickEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save recipe click: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(())
    }
}
