use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, today_utc},
    health::ports::HealthCheckRepository,
    pantry::{
        entities::{PantryItem, PantryItemConfig},
        ports::{PantryItemRepository, PantryService},
        value_objects::{
            AddPantryItemInput, PantryItemView, PantryMutation, PantryStats,
            UpdatePantryItemInput,
        },
    },
    recipe::ports::{RecipeLLMClient, RecipeRepository},
    trigger::{
        ports::{TriggerService, TriggerStateRepository},
        value_objects::EvaluationOutcome,
    },
    user_profile::ports::UserProfileRepository,
};

impl<P, R, T, UP, HC, LLM> PantryService for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    async fn list_items(&self, user_id: Uuid) -> Result<Vec<PantryItemView>, CoreError> {
        let today = today_utc();
        let items = self.pantry_repository.list_by_user(user_id).await?;

        let mut views: Vec<PantryItemView> = items
            .into_iter()
            .map(|item| PantryItemView::new(item, today))
            .collect();

        // expired, then expiring, then fresh; soonest expiry first within a status
        views.sort_by(|a, b| {
            a.status
                .sort_rank()
                .cmp(&b.status.sort_rank())
                .then(a.item.expiry_date.cmp(&b.item.expiry_date))
                .then_with(|| a.item.name.cmp(&b.item.name))
        });

        Ok(views)
    }

    async fn get_stats(&self, user_id: Uuid) -> Result<PantryStats, CoreError> {
        let items = self.pantry_repository.list_by_user(user_id).await?;

        Ok(PantryStats::from_items(&items, today_utc()))
    }

    async fn add_item(
        &self,
        user_id: Uuid,
        input: AddPantryItemInput,
    ) -> Result<PantryMutation, CoreError> {
        let name = validate_name(&input.name)?;
        validate_quantity(input.quantity)?;

        let item = PantryItem::new(PantryItemConfig {
            user_id,
            name,
            category: input.category.trim().to_string(),
            quantity: input.quantity,
            unit: input.unit.trim().to_string(),
            expiry_date: input.expiry_date,
            added_date: input.added_date,
        });

        let item = self.pantry_repository.create(item).await?;
        info!(%user_id, item_id = %item.id, name = %item.name, "pantry item added");

        Ok(PantryMutation {
            item: Some(PantryItemView::new(item, today_utc())),
            evaluation: self.reevaluate(user_id).await,
        })
    }

    async fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        mut input: UpdatePantryItemInput,
    ) -> Result<PantryMutation, CoreError> {
        if let Some(name) = input.name.as_deref() {
            input.name = Some(validate_name(name)?);
        }
        if let Some(quantity) = input.quantity {
            validate_quantity(quantity)?;
        }

        let mut item = self
            .pantry_repository
            .get_by_id(item_id, user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        item.update(input);
        let item = self.pantry_repository.update(item).await?;

        Ok(PantryMutation {
            item: Some(PantryItemView::new(item, today_utc())),
            evaluation: self.reevaluate(user_id).await,
        })
    }

    async fn remove_item(&self, user_id: Uuid, item_id: Uuid) -> Result<PantryMutation, CoreError> {
        if !self.pantry_repository.delete(item_id, user_id).await? {
            return Err(CoreError::NotFound);
        }
        info!(%user_id, %item_id, "pantry item used");

        Ok(PantryMutation {
            item: None,
            evaluation: self.reevaluate(user_id).await,
        })
    }
}

impl<P, R, T, UP, HC, LLM> Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    /// The mutation has already been stored, so a failed evaluation is
    /// logged rather than returned.
    async fn reevaluate(&self, user_id: Uuid) -> Option<EvaluationOutcome> {
        match self.evaluate_for_user(user_id).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(error = %e, %user_id, "trigger evaluation after pantry change failed");
                None
            }
        }
    }
}

fn validate_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("item name is required".to_string()));
    }

    Ok(name.to_string())
}

fn validate_quantity(quantity: f64) -> Result<(), CoreError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(CoreError::Invalid(
            "quantity must be a non-negative number".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::domain::{
        pantry::value_objects::FreshnessStatus,
        test_support::{InMemoryRecipeRepository, ScriptedLLMClient, TestService, recipe_json, test_service},
        trigger::value_objects::{EvaluationStatus, TriggerReason},
    };

    fn service() -> TestService {
        test_service(
            InMemoryRecipeRepository::default(),
            ScriptedLLMClient::text(recipe_json(&["A", "B", "C"])),
        )
    }

    fn add_input(name: &str, days_from_today: i64) -> AddPantryItemInput {
        let today = today_utc();
        let expiry_date = if days_from_today >= 0 {
            today + Days::new(days_from_today as u64)
        } else {
            today - Days::new(days_from_today.unsigned_abs())
        };

        AddPantryItemInput {
            name: name.to_string(),
            category: "Produce".to_string(),
            quantity: 1.0,
            unit: "bunch".to_string(),
            expiry_date,
            added_date: None,
        }
    }

    #[tokio::test]
    async fn test_adding_urgent_item_generates_recipes() {
        let service = service();
        let user_id = Uuid::new_v4();

        let mutation = service.add_item(user_id, add_input("Spinach", 1)).await.unwrap();

        let view = mutation.item.unwrap();
        assert_eq!(view.status, FreshnessStatus::Expiring);
        assert_eq!(view.days_until_expiry, 1);
        let evaluation = mutation.evaluation.unwrap();
        assert_eq!(evaluation.status, EvaluationStatus::Generated);
        assert!(evaluation.decision.unwrap().should_alert());
    }

    #[tokio::test]
    async fn test_adding_fresh_item_does_not_generate() {
        let service = service();
        let user_id = Uuid::new_v4();

        let mutation = service.add_item(user_id, add_input("Rice", 60)).await.unwrap();

        assert_eq!(mutation.evaluation.unwrap().status, EvaluationStatus::Unchanged);
        assert_eq!(service.llm_client.calls(), 0);
    }

    #[tokio::test]
    async fn test_marking_used_regenerates_for_remaining_urgent_items() {
        let service = service();
        let user_id = Uuid::new_v4();

        let milk = service.add_item(user_id, add_input("Milk", 0)).await.unwrap();
        service.add_item(user_id, add_input("Spinach", 2)).await.unwrap();
        let milk_id = milk.item.unwrap().item.id;

        let mutation = service.remove_item(user_id, milk_id).await.unwrap();

        let evaluation = mutation.evaluation.unwrap();
        assert_eq!(evaluation.status, EvaluationStatus::Generated);
        assert_eq!(
            evaluation.decision.unwrap().reason,
            Some(TriggerReason::ItemsRemoved {
                names: vec!["Milk".to_string()]
            })
        );
        assert_eq!(service.llm_client.calls(), 3);
    }

    #[tokio::test]
    async fn test_remove_missing_item() {
        let service = service();

        let result = service.remove_item(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_items_are_scoped_per_user() {
        let service = service();
        let owner = Uuid::new_v4();

        let added = service.add_item(owner, add_input("Milk", 10)).await.unwrap();
        let item_id = added.item.unwrap().item.id;

        let result = service
            .update_item(Uuid::new_v4(), item_id, UpdatePantryItemInput::default())
            .await;

        assert!(matches!(result, Err(CoreError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_orders_expired_expiring_fresh() {
        let service = service();
        let user_id = Uuid::new_v4();
        for (name, days) in [("Rice", 30), ("Milk", 2), ("Bread", -2), ("Yogurt", 1)] {
            service.add_item(user_id, add_input(name, days)).await.unwrap();
        }

        let names: Vec<String> = service
            .list_items(user_id)
            .await
            .unwrap()
            .into_iter()
            .map(|view| view.item.name)
            .collect();

        assert_eq!(names, vec!["Bread", "Yogurt", "Milk", "Rice"]);
    }

    #[tokio::test]
    async fn test_stats() {
        let service = service();
        let user_id = Uuid::new_v4();
        for (name, days) in [("Rice", 30), ("Milk", 2), ("Bread", -2), ("Oats", 90)] {
            service.add_item(user_id, add_input(name, days)).await.unwrap();
        }

        let stats = service.get_stats(user_id).await.unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.fresh, 2);
        assert_eq!(stats.needs_attention, 2);
        assert_eq!(stats.saved_percentage, 50);
    }

    #[tokio::test]
    async fn test_blank_name_rejected() {
        let service = service();

        let result = service.add_item(Uuid::new_v4(), add_input("  ", 3)).await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_moves_item_into_urgent_band() {
        let service = service();
        let user_id = Uuid::new_v4();

        let added = service.add_item(user_id, add_input("Cheese", 20)).await.unwrap();
        let item_id = added.item.unwrap().item.id;

        let mutation = service
            .update_item(
                user_id,
                item_id,
                UpdatePantryItemInput {
                    expiry_date: Some(today_utc()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(mutation.item.unwrap().status, FreshnessStatus::Expiring);
        assert_eq!(mutation.evaluation.unwrap().status, EvaluationStatus::Generated);
    }
}
