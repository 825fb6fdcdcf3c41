use chrono::Utc;
use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::{DatabaseHealthStatus, HealthState, HealthStatus, SERVICE_NAME},
        ports::{HealthCheckRepository, HealthCheckService},
    },
    pantry::ports::PantryItemRepository,
    recipe::ports::{RecipeLLMClient, RecipeRepository},
    trigger::ports::TriggerStateRepository,
    user_profile::ports::UserProfileRepository,
};

impl<P, R, T, UP, HC, LLM> HealthCheckService for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    async fn health(&self) -> HealthStatus {
        let database = match self.health_check_repository.ping().await {
            Ok(latency_ms) => DatabaseHealthStatus {
                connected: true,
                latency_ms: Some(latency_ms),
            },
            Err(e) => {
                warn!(error = %e, "database health check failed");
                DatabaseHealthStatus {
                    connected: false,
                    latency_ms: None,
                }
            }
        };

        HealthStatus {
            service: SERVICE_NAME.to_string(),
            status: if database.connected {
                HealthState::Ok
            } else {
                HealthState::Degraded
            },
            database,
            timestamp: Utc::now(),
        }
    }

    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.health_check_repository.ping().await?;

        Ok(DatabaseHealthStatus {
            connected: true,
            latency_ms: Some(latency_ms),
        })
    }
}
