use crate::domain::{pantry::entities::PantryItem, user_profile::entities::UserProfile};

/// Build the generation prompt from the urgent items (critical first) and
/// the optional profile constraints.
pub fn build_recipe_prompt(urgent_items: &[PantryItem], profile: Option<&UserProfile>) -> String {
    let names = urgent_items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!(
        "Create 3 recipes using these expiring ingredients: {names}. Include common pantry items."
    );

    let requirements = profile.map(profile_requirements).unwrap_or_default();
    if !requirements.is_empty() {
        prompt.push_str(&format!(" Requirements: {}.", requirements.join(", ")));
    }

    prompt.push_str(
        " Return JSON with recipeName, description, servingSize, ingredients[], instructions[].",
    );
    prompt
}

fn profile_requirements(profile: &UserProfile) -> Vec<String> {
    let mut requirements = Vec::new();

    let dietary = profile.dietary_requirements();
    if !dietary.is_empty() {
        requirements.push(format!("dietary requirements: {}", dietary.join(", ")));
    }

    if let Some(style) = profile
        .cooking_style
        .as_deref()
        .filter(|style| !style.trim().is_empty())
    {
        requirements.push(format!("cooking style: {style}"));
    }

    if profile.household_size > 1 {
        requirements.push(format!("serves {} people", profile.household_size));
    }

    if !profile.cooking_goals.is_empty() {
        requirements.push(format!("focus on: {}", profile.cooking_goals.join(", ")));
    }

    requirements
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::pantry::entities::PantryItemConfig;

    fn item(name: &str) -> PantryItem {
        PantryItem::new(PantryItemConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: "Produce".to_string(),
            quantity: 1.0,
            unit: "pcs".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            added_date: None,
        })
    }

    fn profile() -> UserProfile {
        let mut profile = UserProfile::empty(Uuid::nil());
        profile.household_size = 4;
        profile.dietary_preferences = vec!["No restrictions".to_string(), "Vegetarian".to_string()];
        profile.cooking_style = Some("Quick & Easy".to_string());
        profile.cooking_goals = vec!["Reduce waste".to_string(), "Save money".to_string()];
        profile
    }

    #[test]
    fn test_prompt_without_profile() {
        let prompt = build_recipe_prompt(&[item("Spinach"), item("Milk")], None);

        assert_eq!(
            prompt,
            "Create 3 recipes using these expiring ingredients: Spinach, Milk. Include common pantry items. \
             Return JSON with recipeName, description, servingSize, ingredients[], instructions[]."
        );
    }

    #[test]
    fn test_prompt_with_profile_constraints() {
        let prompt = build_recipe_prompt(&[item("Spinach")], Some(&profile()));

        assert!(prompt.contains(
            "Requirements: dietary requirements: Vegetarian, cooking style: Quick & Easy, \
             serves 4 people, focus on: Reduce waste, Save money."
        ));
        assert!(!prompt.contains("No restrictions"));
    }

    #[test]
    fn test_single_person_household_not_mentioned() {
        let mut profile = profile();
        profile.household_size = 1;

        let prompt = build_recipe_prompt(&[item("Spinach")], Some(&profile));

        assert!(!prompt.contains("serves"));
    }
}
