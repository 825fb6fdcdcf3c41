use serde_json::Value;

use crate::domain::recipe::{helpers::MAX_RECIPES_PER_BATCH, value_objects::RecipeDraft};

/// Outcome of validating a model response against the recipe schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRecipes {
    Ok(Vec<RecipeDraft>),
    SchemaError(String),
    EmptyError,
}

/// Validate raw model output. Tolerates a fenced ```json block around the
/// payload; anything else that is not an array of complete recipes is a
/// schema error. Entries past the first three are ignored unchecked.
pub fn parse_recipe_response(raw: &str) -> ParsedRecipes {
    let payload = strip_code_fence(raw);

    let value: Value = match serde_json::from_str(payload) {
        Ok(value) => value,
        Err(e) => return ParsedRecipes::SchemaError(format!("invalid JSON: {e}")),
    };

    let Value::Array(entries) = value else {
        return ParsedRecipes::SchemaError("response is not an array".to_string());
    };

    if entries.is_empty() {
        return ParsedRecipes::EmptyError;
    }

    let mut drafts = Vec::with_capacity(MAX_RECIPES_PER_BATCH);
    for (index, entry) in entries.into_iter().take(MAX_RECIPES_PER_BATCH).enumerate() {
        let draft: RecipeDraft = match serde_json::from_value(entry) {
            Ok(draft) => draft,
            Err(e) => return ParsedRecipes::SchemaError(format!("recipe {index}: {e}")),
        };

        if draft.recipe_name.trim().is_empty() {
            return ParsedRecipes::SchemaError(format!("recipe {index}: empty recipeName"));
        }

        drafts.push(draft);
    }

    ParsedRecipes::Ok(drafts)
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_RECIPE: &str = r#"[{
        "recipeName": "Spinach Frittata",
        "description": "Eggs baked with greens",
        "servingSize": "Serves 2",
        "ingredients": ["Spinach", "Eggs"],
        "instructions": ["Whisk", "Bake"]
    }]"#;

    #[test]
    fn test_valid_array() {
        let ParsedRecipes::Ok(drafts) = parse_recipe_response(ONE_RECIPE) else {
            panic!("expected recipes");
        };

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].recipe_name, "Spinach Frittata");
        assert_eq!(drafts[0].ingredients, vec!["Spinach", "Eggs"]);
    }

    #[test]
    fn test_fenced_payload() {
        let fenced = format!("```json\n{ONE_RECIPE}\n```");

        assert!(matches!(parse_recipe_response(&fenced), ParsedRecipes::Ok(_)));
    }

    #[test]
    fn test_object_is_schema_error() {
        let result = parse_recipe_response(r#"{"recipes": []}"#);

        assert!(matches!(result, ParsedRecipes::SchemaError(_)));
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(parse_recipe_response("[]"), ParsedRecipes::EmptyError);
    }

    #[test]
    fn test_missing_field_is_schema_error() {
        let result = parse_recipe_response(r#"[{"recipeName": "Soup", "description": "Hot"}]"#);

        assert!(matches!(result, ParsedRecipes::SchemaError(_)));
    }

    #[test]
    fn test_entries_past_the_third_are_not_validated() {
        let raw = r#"[
            {"recipeName": "A", "description": "a", "servingSize": "Serves 2",
             "ingredients": ["Milk"], "instructions": ["Cook"]},
            {"recipeName": "B", "description": "b", "servingSize": "Serves 2",
             "ingredients": ["Milk"], "instructions": ["Cook"]},
            {"recipeName": "C", "description": "c", "servingSize": "Serves 2",
             "ingredients": ["Milk"], "instructions": ["Cook"]},
            {"recipeName": "D"}
        ]"#;

        let ParsedRecipes::Ok(drafts) = parse_recipe_response(raw) else {
            panic!("expected recipes");
        };

        let names: Vec<&str> = drafts.iter().map(|d| d.recipe_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_blank_name_is_schema_error() {
        let raw = r#"[{"recipeName": "  ", "description": "", "servingSize": "",
            "ingredients": [], "instructions": []}]"#;

        assert!(matches!(parse_recipe_response(raw), ParsedRecipes::SchemaError(_)));
    }

    #[test]
    fn test_garbage_is_schema_error() {
        assert!(matches!(parse_recipe_response("Sure! Here are some recipes"), ParsedRecipes::SchemaError(_)));
    }
}
