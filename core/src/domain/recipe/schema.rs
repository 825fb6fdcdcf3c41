use serde_json::json;

/// Response schema for recipe generation: an array of recipes, each with
/// the five required fields.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "recipeName": { "type": "string" },
                "description": { "type": "string" },
                "servingSize": { "type": "string" },
                "ingredients": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": [
                "recipeName", "description", "servingSize",
                "ingredients", "instructions"
            ]
        }
    })
}
