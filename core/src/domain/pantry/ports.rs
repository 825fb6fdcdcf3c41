use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    pantry::{
        entities::PantryItem,
        value_objects::{
            AddPantryItemInput, PantryItemView, PantryMutation, PantryStats,
            UpdatePantryItemInput,
        },
    },
};

/// Repository trait for pantry items, always scoped by owning user
#[cfg_attr(test, mockall::automock)]
pub trait PantryItemRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<PantryItem>, CoreError>> + Send;

    fn create(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn update(
        &self,
        item: PantryItem,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    /// Hard delete. Returns `false` when nothing matched.
    fn delete(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Service trait for pantry operations. Every mutation re-evaluates the
/// recipe trigger before returning.
pub trait PantryService: Send + Sync {
    fn list_items(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItemView>, CoreError>> + Send;

    fn get_stats(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<PantryStats, CoreError>> + Send;

    fn add_item(
        &self,
        user_id: Uuid,
        input: AddPantryItemInput,
    ) -> impl Future<Output = Result<PantryMutation, CoreError>> + Send;

    fn update_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        input: UpdatePantryItemInput,
    ) -> impl Future<Output = Result<PantryMutation, CoreError>> + Send;

    /// "Mark as used": removes the item for good.
    fn remove_item(
        &self,
        user_id: Uuid,
        item_id: Uuid,
    ) -> impl Future<Output = Result<PantryMutation, CoreError>> + Send;
}
