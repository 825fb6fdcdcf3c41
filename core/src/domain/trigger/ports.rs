use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    trigger::{
        entities::TriggerState,
        value_objects::{EvaluateInput, EvaluationOutcome},
    },
};

/// Durable storage for the trigger set, so the debouncer survives restarts
#[cfg_attr(test, mockall::automock)]
pub trait TriggerStateRepository: Send + Sync {
    fn get(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<TriggerState>, CoreError>> + Send;

    fn save(
        &self,
        user_id: Uuid,
        state: TriggerState,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the expiry-driven recipe trigger
pub trait TriggerService: Send + Sync {
    /// Evaluate a pantry snapshot and run the recipe pipeline when warranted.
    fn evaluate_and_maybe_generate(
        &self,
        input: EvaluateInput,
    ) -> impl Future<Output = Result<EvaluationOutcome, CoreError>> + Send;

    /// Load the user's pantry and profile, then evaluate.
    fn evaluate_for_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<EvaluationOutcome, CoreError>> + Send;

    /// Forget the last trigger set and evaluate again, so any urgent item
    /// produces a fresh generation. Fails with `GenerationInFlight` while a
    /// generation for the user is running.
    fn force_refresh(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<EvaluationOutcome, CoreError>> + Send;

    /// Stored trigger state, or one rebuilt from the provenance of the most
    /// recent stored recipe.
    fn load_trigger_state(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<TriggerState, CoreError>> + Send;
}
