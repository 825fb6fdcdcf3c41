use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use serde_json::json;
use uuid::Uuid;

use crate::domain::{
    common::{RecipeConfig, entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    pantry::{entities::PantryItem, ports::PantryItemRepository},
    recipe::{
        entities::{GeneratedRecipe, RecipeClick},
        ports::{RecipeLLMClient, RecipeRepository},
        value_objects::GenerationParameters,
    },
    trigger::{entities::TriggerState, ports::TriggerStateRepository},
    user_profile::{entities::UserProfile, ports::UserProfileRepository},
};

pub(crate) type TestService = Service<
    InMemoryPantryRepository,
    InMemoryRecipeRepository,
    InMemoryTriggerStateRepository,
    InMemoryUserProfileRepository,
    StaticHealthCheck,
    ScriptedLLMClient,
>;

pub(crate) fn test_service(
    recipe_repository: InMemoryRecipeRepository,
    llm_client: ScriptedLLMClient,
) -> TestService {
    Service::new(
        InMemoryPantryRepository::default(),
        recipe_repository,
        InMemoryTriggerStateRepository::default(),
        InMemoryUserProfileRepository::default(),
        StaticHealthCheck,
        llm_client,
        RecipeConfig::default(),
    )
}

/// A model response holding one recipe per name.
pub(crate) fn recipe_json(names: &[&str]) -> String {
    let recipes: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            json!({
                "recipeName": name,
                "description": format!("{name} from the pantry"),
                "servingSize": "Serves 2",
                "ingredients": ["Milk", "Salt"],
                "instructions": ["Prepare", "Cook", "Serve"]
            })
        })
        .collect();

    serde_json::Value::Array(recipes).to_string()
}

fn lock<V>(mutex: &Mutex<V>) -> std::sync::MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub(crate) struct InMemoryPantryRepository {
    items: Mutex<Vec<PantryItem>>,
}

impl InMemoryPantryRepository {
    pub(crate) fn insert(&self, item: PantryItem) {
        lock(&self.items).push(item);
    }
}

impl PantryItemRepository for InMemoryPantryRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        Ok(lock(&self.items)
            .iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, item_id: Uuid, user_id: Uuid) -> Result<Option<PantryItem>, CoreError> {
        Ok(lock(&self.items)
            .iter()
            .find(|item| item.id == item_id && item.user_id == user_id)
            .cloned())
    }

    async fn create(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        lock(&self.items).push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let mut items = lock(&self.items);
        let stored = items
            .iter_mut()
            .find(|stored| stored.id == item.id && stored.user_id == item.user_id)
            .ok_or(CoreError::NotFound)?;
        *stored = item.clone();
        Ok(item)
    }

    async fn delete(&self, item_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let mut items = lock(&self.items);
        let before = items.len();
        items.retain(|item| !(item.id == item_id && item.user_id == user_id));
        Ok(items.len() != before)
    }
}

/// Recipe store that can be told to fail every save after the first `n`.
#[derive(Default)]
pub(crate) struct InMemoryRecipeRepository {
    recipes: Mutex<Vec<GeneratedRecipe>>,
    clicks: Mutex<Vec<RecipeClick>>,
    fail_after: Option<usize>,
}

impl InMemoryRecipeRepository {
    pub(crate) fn failing_after(saves: usize) -> Self {
        Self {
            fail_after: Some(saves),
            ..Default::default()
        }
    }

    pub(crate) fn seed(&self, recipe: GeneratedRecipe) {
        lock(&self.recipes).push(recipe);
    }

    pub(crate) fn stored(&self) -> Vec<GeneratedRecipe> {
        lock(&self.recipes).clone()
    }

    fn check_failure(&self, saved: usize) -> Result<(), CoreError> {
        match self.fail_after {
            Some(limit) if saved >= limit => {
                Err(CoreError::Persistence("database unavailable".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn get_recipes(&self, user_id: Uuid, limit: u64) -> Result<Vec<GeneratedRecipe>, CoreError> {
        let mut recipes: Vec<GeneratedRecipe> = lock(&self.recipes)
            .iter()
            .filter(|recipe| recipe.user_id == user_id)
            .cloned()
            .collect();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recipes.truncate(limit as usize);

        Ok(recipes)
    }

    async fn save_recipe(&self, recipe: GeneratedRecipe) -> Result<GeneratedRecipe, CoreError> {
        let mut recipes = lock(&self.recipes);
        self.check_failure(recipes.len())?;
        recipes.push(recipe.clone());

        Ok(recipe)
    }

    async fn save_recipe_click(&self, click: RecipeClick) -> Result<(), CoreError> {
        let mut clicks = lock(&self.clicks);
        self.check_failure(clicks.len())?;
        clicks.push(click);

        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryTriggerStateRepository {
    states: Mutex<HashMap<Uuid, TriggerState>>,
}

impl InMemoryTriggerStateRepository {
    pub(crate) fn stored(&self, user_id: Uuid) -> Option<TriggerState> {
        lock(&self.states).get(&user_id).cloned()
    }
}

impl TriggerStateRepository for InMemoryTriggerStateRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<TriggerState>, CoreError> {
        Ok(self.stored(user_id))
    }

    async fn save(&self, user_id: Uuid, state: TriggerState) -> Result<(), CoreError> {
        lock(&self.states).insert(user_id, state);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryUserProfileRepository {
    profiles: Mutex<HashMap<Uuid, UserProfile>>,
}

impl UserProfileRepository for InMemoryUserProfileRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(lock(&self.profiles).get(&user_id).cloned())
    }

    async fn upsert(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        lock(&self.profiles).insert(profile.user_id, profile.clone());
        Ok(profile)
    }
}

pub(crate) struct StaticHealthCheck;

impl HealthCheckRepository for StaticHealthCheck {
    async fn ping(&self) -> Result<u64, CoreError> {
        Ok(1)
    }
}

enum Script {
    Text(String),
    Error(CoreError),
    Delayed(Duration, String),
}

/// Model stand-in that answers every call the same way and records prompts.
pub(crate) struct ScriptedLLMClient {
    script: Script,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLLMClient {
    fn with(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn text(body: String) -> Self {
        Self::with(Script::Text(body))
    }

    pub(crate) fn error(error: CoreError) -> Self {
        Self::with(Script::Error(error))
    }

    pub(crate) fn delayed(delay: Duration, body: String) -> Self {
        Self::with(Script::Delayed(delay, body))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl RecipeLLMClient for ScriptedLLMClient {
    async fn generate_recipes(
        &self,
        prompt: String,
        _schema: serde_json::Value,
        _parameters: GenerationParameters,
    ) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.prompts).push(prompt);

        match &self.script {
            Script::Text(body) => Ok(body.clone()),
            Script::Error(error) => Err(error.clone()),
            Script::Delayed(delay, body) => {
                tokio::time::sleep(*delay).await;
                Ok(body.clone())
            }
        }
    }
}
