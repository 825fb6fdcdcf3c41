use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::domain::trigger::entities::TriggerPhase;

/// Per-user trigger phases. At most one generation per user may be in the
/// `Generating` phase; trigger events arriving meanwhile are dropped.
#[derive(Debug, Default)]
pub struct TriggerSessions {
    phases: Mutex<HashMap<Uuid, TriggerPhase>>,
}

impl TriggerSessions {
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, TriggerPhase>> {
        self.phases.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn phase(&self, user_id: Uuid) -> TriggerPhase {
        self.lock().get(&user_id).copied().unwrap_or_default()
    }

    /// Enter `Evaluating` unless a generation is running.
    pub fn begin_evaluation(self: &Arc<Self>, user_id: Uuid) -> Option<SessionGuard> {
        let mut phases = self.lock();
        let phase = phases.entry(user_id).or_default();

        if *phase == TriggerPhase::Generating {
            return None;
        }
        *phase = TriggerPhase::Evaluating;

        Some(SessionGuard {
            sessions: Arc::clone(self),
            user_id,
            generating: false,
        })
    }
}

/// Holds a user's session out of `Idle`. Dropping it returns the session to
/// `Idle`, whether generation succeeded, fell back, or never started.
#[derive(Debug)]
pub struct SessionGuard {
    sessions: Arc<TriggerSessions>,
    user_id: Uuid,
    generating: bool,
}

impl SessionGuard {
    /// Claim the `Generating` phase. Fails when a concurrent evaluation
    /// already holds it.
    pub fn try_start_generation(&mut self) -> bool {
        if self.generating {
            return true;
        }

        let mut phases = self.sessions.lock();
        let phase = phases.entry(self.user_id).or_default();
        if *phase == TriggerPhase::Generating {
            return false;
        }

        *phase = TriggerPhase::Generating;
        self.generating = true;
        true
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let mut phases = self.sessions.lock();

        match phases.get(&self.user_id) {
            // Another guard owns the running generation.
            Some(TriggerPhase::Generating) if !self.generating => {}
            _ => {
                phases.remove(&self.user_id);
            }
        }
    }
}
