use crate::{
    domain::recipe::entities::{GeneratedRecipe, RecipeClick},
    entity::{recipe_clicks, recipes},
    infrastructure::db::strings_from_json,
};

impl From<&recipes::Model> for GeneratedRecipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_name: model.recipe_name.clone(),
            description: model.description.clone(),
            serving_size: model.serving_size.clone(),
            ingredients: strings_from_json(&model.ingredients),
            instructions: strings_from_json(&model.instructions),
            estimated_time: model.estimated_time.clone(),
            // rows written before difficulty was tracked read as Easy
            difficulty: model.difficulty.parse().unwrap_or_default(),
            triggered_by: strings_from_json(&model.triggered_by),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for GeneratedRecipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl From<recipe_clicks::Model> for RecipeClick {
    fn from(model: recipe_clicks::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            recipe_name: model.recipe_name,
            clicked_at: model.clicked_at.to_utc(),
        }
    }
}
