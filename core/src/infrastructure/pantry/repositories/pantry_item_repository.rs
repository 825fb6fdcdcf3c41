use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        pantry::{entities::PantryItem, ports::PantryItemRepository},
    },
    entity::pantry_items::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresPantryItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresPantryItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_active_model(item: &PantryItem) -> ActiveModel {
    ActiveModel {
        id: Set(item.id),
        user_id: Set(item.user_id),
        name: Set(item.name.clone()),
        category: Set(item.category.clone()),
        quantity: Set(item.quantity),
        unit: Set(item.unit.clone()),
        expiry_date: Set(item.expiry_date),
        added_date: Set(item.added_date),
        created_at: Set(item.created_at.fixed_offset()),
        updated_at: Set(item.updated_at.fixed_offset()),
    }
}

impl PantryItemRepository for PostgresPantryItemRepository {
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<PantryItem>, CoreError> {
        let items = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::ExpiryDate)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list pantry items: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(items.into_iter().map(PantryItem::from).collect())
    }

    async fn get_by_id(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<PantryItem>, CoreError> {
        let item = Entity::find()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get pantry item: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(item.map(PantryItem::from))
    }

    async fn create(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let created = Entity::insert(to_active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create pantry item: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(PantryItem::from(created))
    }

    async fn update(&self, item: PantryItem) -> Result<PantryItem, CoreError> {
        let updated = Entity::update(to_active_model(&item))
            .filter(Column::UserId.eq(item.user_id))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                sea_orm::DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update pantry item: {}", e);
                    CoreError::Persistence(e.to_string())
                }
            })?;

        Ok(PantryItem::from(updated))
    }

    async fn delete(&self, item_id: Uuid, user_id: Uuid) -> Result<bool, CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(item_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete pantry item: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
