use crate::{
    domain::trigger::entities::TriggerState, entity::trigger_states,
    infrastructure::db::strings_from_json,
};

impl From<trigger_states::Model> for TriggerState {
    fn from(model: trigger_states::Model) -> Self {
        TriggerState::new(strings_from_json(&model.last_triggered_item_names))
    }
}
