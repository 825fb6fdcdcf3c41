use crate::{domain::pantry::entities::PantryItem, entity::pantry_items};

impl From<&pantry_items::Model> for PantryItem {
    fn from(model: &pantry_items::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name.clone(),
            category: model.category.clone(),
            quantity: model.quantity,
            unit: model.unit.clone(),
            expiry_date: model.expiry_date,
            added_date: model.added_date,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<pantry_items::Model> for PantryItem {
    fn from(model: pantry_items::Model) -> Self {
        Self::from(&model)
    }
}
