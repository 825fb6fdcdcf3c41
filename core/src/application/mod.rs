use crate::{
    domain::common::{ShelfLifeConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        llm::gemini_client::GeminiRecipeClient,
        pantry::repositories::pantry_item_repository::PostgresPantryItemRepository,
        recipe::repositories::recipe_repository::PostgresRecipeRepository,
        trigger::repositories::trigger_state_repository::PostgresTriggerStateRepository,
        user_profile::repositories::user_profile_repository::PostgresUserProfileRepository,
    },
};

pub type ShelfLifeService = Service<
    PostgresPantryItemRepository,
    PostgresRecipeRepository,
    PostgresTriggerStateRepository,
    PostgresUserProfileRepository,
    PostgresHealthCheckRepository,
    GeminiRecipeClient,
>;

pub async fn create_service(config: ShelfLifeConfig) -> Result<ShelfLifeService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresPantryItemRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresTriggerStateRepository::new(db.clone()),
        PostgresUserProfileRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        GeminiRecipeClient::new(&config.llm),
        config.recipe,
    ))
}
