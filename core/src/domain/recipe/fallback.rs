use uuid::Uuid;

use crate::domain::{
    recipe::entities::{Difficulty, GeneratedRecipe, GeneratedRecipeConfig},
    user_profile::entities::UserProfile,
};

const DEFAULT_FALLBACK_SERVING: &str = "Serves 2-3";

struct Template {
    name: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    estimated_time: &'static str,
}

const TEMPLATES: [Template; 3] = [
    Template {
        name: "Quick Stir Fry",
        description: "A fast and healthy way to use up vegetables and proteins.",
        ingredients: &[
            "Available vegetables",
            "2 tbsp oil",
            "2 cloves garlic",
            "Soy sauce",
            "Rice or noodles",
        ],
        instructions: &[
            "Heat oil in pan",
            "Add garlic and vegetables",
            "Stir-fry for 5-7 minutes",
            "Add soy sauce",
            "Serve over rice",
        ],
        estimated_time: "15 min",
    },
    Template {
        name: "Simple Soup",
        description: "Comforting soup using whatever vegetables you have on hand.",
        ingredients: &[
            "Available vegetables",
            "4 cups broth",
            "1 onion",
            "Salt and pepper",
            "Herbs",
        ],
        instructions: &[
            "Sauté onion",
            "Add vegetables and broth",
            "Simmer 20 minutes",
            "Season to taste",
            "Serve hot",
        ],
        estimated_time: "25 min",
    },
    Template {
        name: "Pantry Pasta",
        description: "Use up ingredients in a satisfying pasta dish.",
        ingredients: &[
            "8 oz pasta",
            "Available proteins/vegetables",
            "2 tbsp olive oil",
            "Garlic",
            "Parmesan cheese",
        ],
        instructions: &[
            "Cook pasta",
            "Sauté garlic and ingredients",
            "Combine with pasta",
            "Add cheese",
            "Serve immediately",
        ],
        estimated_time: "20 min",
    },
];

/// Three canned recipes used when generation fails. Deterministic for a
/// given profile; ingredient lists follow the profile's dietary filters.
pub fn build_fallback_recipes(
    user_id: Uuid,
    profile: Option<&UserProfile>,
    triggered_by: &[String],
) -> Vec<GeneratedRecipe> {
    let serving_size = profile
        .map(|profile| format!("Serves {}", profile.household_size))
        .unwrap_or_else(|| DEFAULT_FALLBACK_SERVING.to_string());

    let meat_free = profile.is_some_and(|profile| {
        profile.has_dietary_preference("Vegetarian") || profile.has_dietary_preference("Vegan")
    });
    let gluten_free = profile.is_some_and(|profile| profile.has_dietary_preference("Gluten-free"));

    TEMPLATES
        .iter()
        .map(|template| {
            GeneratedRecipe::new(GeneratedRecipeConfig {
                user_id,
                recipe_name: template.name.to_string(),
                description: template.description.to_string(),
                serving_size: serving_size.clone(),
                ingredients: filter_ingredients(template.ingredients, meat_free, gluten_free),
                instructions: template.instructions.iter().map(|s| s.to_string()).collect(),
                estimated_time: template.estimated_time.to_string(),
                difficulty: Difficulty::Easy,
                triggered_by: triggered_by.to_vec(),
            })
        })
        .collect()
}

fn filter_ingredients(ingredients: &[&str], meat_free: bool, gluten_free: bool) -> Vec<String> {
    ingredients
        .iter()
        .filter_map(|ingredient| {
            if meat_free && ingredient.contains("proteins") {
                // "proteins/vegetables" still leaves the vegetables
                return ingredient
                    .contains("vegetables")
                    .then(|| "Available vegetables".to_string());
            }
            if meat_free && ingredient.contains("Parmesan cheese") {
                return Some("Nutritional yeast or herbs".to_string());
            }
            if gluten_free && ingredient.contains("pasta") {
                return Some("Gluten-free pasta".to_string());
            }
            Some(ingredient.to_string())
        })
        .collect()
}
