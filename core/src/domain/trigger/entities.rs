use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of the trigger for one user session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TriggerPhase {
    #[default]
    Idle,
    Evaluating,
    Generating,
}

/// Names of the urgent items that caused the most recent generation.
/// Passed explicitly through each evaluation and persisted through
/// `TriggerStateRepository`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerState {
    pub last_triggered_item_names: BTreeSet<String>,
}

impl TriggerState {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            last_triggered_item_names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn record_trigger(&mut self, names: BTreeSet<String>) {
        self.last_triggered_item_names = names;
    }

    pub fn reset(&mut self) {
        self.last_triggered_item_names.clear();
    }

    pub fn names(&self) -> Vec<String> {
        self.last_triggered_item_names.iter().cloned().collect()
    }
}
