use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, today_utc},
    health::ports::HealthCheckRepository,
    pantry::ports::PantryItemRepository,
    recipe::ports::{RecipeLLMClient, RecipeRepository, RecipeService},
    trigger::{
        debouncer::decide,
        entities::{TriggerPhase, TriggerState},
        ports::{TriggerService, TriggerStateRepository},
        value_objects::{EvaluateInput, EvaluationOutcome, EvaluationStatus, TriggerReason},
    },
    user_profile::ports::UserProfileRepository,
};

impl<P, R, T, UP, HC, LLM> TriggerService for Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    async fn evaluate_and_maybe_generate(
        &self,
        input: EvaluateInput,
    ) -> Result<EvaluationOutcome, CoreError> {
        self.run_evaluation(input, false).await
    }

    async fn evaluate_for_user(&self, user_id: Uuid) -> Result<EvaluationOutcome, CoreError> {
        let input = self.snapshot(user_id).await?;
        self.run_evaluation(input, false).await
    }

    async fn force_refresh(&self, user_id: Uuid) -> Result<EvaluationOutcome, CoreError> {
        let input = self.snapshot(user_id).await?;
        let outcome = self.run_evaluation(input, true).await?;

        if outcome.status == EvaluationStatus::InFlight {
            return Err(CoreError::GenerationInFlight);
        }
        Ok(outcome)
    }

    async fn load_trigger_state(&self, user_id: Uuid) -> Result<TriggerState, CoreError> {
        if let Some(state) = self.trigger_state_repository.get(user_id).await? {
            return Ok(state);
        }

        let latest = self.recipe_repository.get_recipes(user_id, 1).await?;
        let Some(recipe) = latest.into_iter().next() else {
            return Ok(TriggerState::default());
        };

        let state = TriggerState::new(recipe.triggered_by);
        debug!(%user_id, names = ?state.names(), "trigger state rebuilt from latest recipe");

        if let Err(e) = self
            .trigger_state_repository
            .save(user_id, state.clone())
            .await
        {
            warn!(error = %e, %user_id, "failed to store rebuilt trigger state");
        }

        Ok(state)
    }
}

impl<P, R, T, UP, HC, LLM> Service<P, R, T, UP, HC, LLM>
where
    P: PantryItemRepository,
    R: RecipeRepository,
    T: TriggerStateRepository,
    UP: UserProfileRepository,
    HC: HealthCheckRepository,
    LLM: RecipeLLMClient,
{
    async fn snapshot(&self, user_id: Uuid) -> Result<EvaluateInput, CoreError> {
        let pantry = self.pantry_repository.list_by_user(user_id).await?;

        let profile = match self.user_profile_repository.get(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, %user_id, "profile unavailable, generating without it");
                None
            }
        };

        Ok(EvaluateInput {
            user_id,
            pantry,
            profile,
            today: today_utc(),
        })
    }

    /// One pass of the trigger state machine. A manual refresh starts from an
    /// empty trigger set, so any urgent item generates.
    #[instrument(skip(self, input), fields(user_id = %input.user_id, items = input.pantry.len()))]
    async fn run_evaluation(
        &self,
        input: EvaluateInput,
        manual: bool,
    ) -> Result<EvaluationOutcome, CoreError> {
        let user_id = input.user_id;

        let Some(mut guard) = self.sessions.begin_evaluation(user_id) else {
            info!("recipe generation already running, trigger event dropped");
            return Ok(EvaluationOutcome::in_flight(None));
        };

        let mut state = if manual {
            let state = TriggerState::default();
            self.store_trigger_state(user_id, state.clone()).await;
            state
        } else {
            self.load_trigger_state(user_id).await?
        };

        let mut decision = decide(&state, &input.pantry, input.today, TriggerPhase::Evaluating);
        if !decision.should_generate {
            debug!(
                critical = decision.critical_count,
                expiring = decision.expiring_count,
                "no new urgent items"
            );
            return Ok(EvaluationOutcome::unchanged(decision));
        }

        if manual {
            decision.reason = Some(TriggerReason::ManualRefresh);
        }

        if !guard.try_start_generation() {
            info!("concurrent evaluation won the generation slot");
            return Ok(EvaluationOutcome::in_flight(Some(decision)));
        }

        state.record_trigger(decision.urgent_names.iter().cloned().collect());
        self.store_trigger_state(user_id, state).await;

        info!(
            reason = ?decision.reason,
            urgent = ?decision.urgent_names,
            removed = ?decision.removed_names,
            "generating recipes"
        );

        let batch = self
            .generate_recipes(user_id, decision.urgent_items.clone(), input.profile)
            .await;
        drop(guard);

        Ok(EvaluationOutcome::generated(decision, batch))
    }

    async fn store_trigger_state(&self, user_id: Uuid, state: TriggerState) {
        if let Err(e) = self.trigger_state_repository.save(user_id, state).await {
            warn!(error = %e, %user_id, "failed to persist trigger state");
        }
    }
}
