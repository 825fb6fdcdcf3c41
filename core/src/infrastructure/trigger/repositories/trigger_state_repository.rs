use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, EntityTrait, sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        trigger::{entities::TriggerState, ports::TriggerStateRepository},
    },
    entity::trigger_states::{ActiveModel, Column, Entity},
    infrastructure::db::strings_to_json,
};

#[derive(Debug, Clone)]
pub struct PostgresTriggerStateRepository {
    pub db: DatabaseConnection,
}

impl PostgresTriggerStateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl TriggerStateRepository for PostgresTriggerStateRepository {
    async fn get(&self, user_id: Uuid) -> Result<Option<TriggerState>, CoreError> {
        let state = Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load trigger state: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(state.map(TriggerState::from))
    }

    async fn save(&self, user_id: Uuid, state: TriggerState) -> Result<(), CoreError> {
        let active_model = ActiveModel {
            user_id: Set(user_id),
            last_triggered_item_names: Set(strings_to_json(&state.names())),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([Column::LastTriggeredItemNames, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save trigger state: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(())
    }
}
