use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    pantry::entities::PantryItem, recipe::value_objects::RecipeBatch,
    user_profile::entities::UserProfile,
};

/// Why a generation was started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TriggerReason {
    NewUrgentItems,
    /// Previously triggering items are gone from the pantry.
    ItemsRemoved { names: Vec<String> },
    ManualRefresh,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TriggerDecision {
    pub critical_count: usize,
    pub expiring_count: usize,
    /// Critical items first, then expiring ones.
    #[serde(skip)]
    pub urgent_items: Vec<PantryItem>,
    pub urgent_names: Vec<String>,
    pub new_urgent_names: Vec<String>,
    pub removed_names: Vec<String>,
    pub should_generate: bool,
    pub reason: Option<TriggerReason>,
}

impl TriggerDecision {
    /// The "urgent recipe alert" is raised once anything is critical.
    pub fn should_alert(&self) -> bool {
        self.critical_count >= 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStatus {
    /// Nothing new to cook with; no generation call made.
    Unchanged,
    Generated,
    /// Another generation for this user was running; the event was dropped.
    InFlight,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EvaluationOutcome {
    pub status: EvaluationStatus,
    pub decision: Option<TriggerDecision>,
    pub batch: Option<RecipeBatch>,
}

impl EvaluationOutcome {
    pub fn unchanged(decision: TriggerDecision) -> Self {
        Self {
            status: EvaluationStatus::Unchanged,
            decision: Some(decision),
            batch: None,
        }
    }

    pub fn generated(decision: TriggerDecision, batch: RecipeBatch) -> Self {
        Self {
            status: EvaluationStatus::Generated,
            decision: Some(decision),
            batch: Some(batch),
        }
    }

    pub fn in_flight(decision: Option<TriggerDecision>) -> Self {
        Self {
            status: EvaluationStatus::InFlight,
            decision,
            batch: None,
        }
    }
}

/// A pantry snapshot to evaluate. `today` pins the calendar date used for
/// every expiry computation in this evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateInput {
    pub user_id: Uuid,
    pub pantry: Vec<PantryItem>,
    pub profile: Option<UserProfile>,
    pub today: NaiveDate,
}
