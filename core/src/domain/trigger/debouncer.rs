use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{
    pantry::{entities::PantryItem, freshness::partition},
    trigger::{
        entities::{TriggerPhase, TriggerState},
        value_objects::{TriggerDecision, TriggerReason},
    },
};

/// Decide whether the current pantry warrants a new generation.
///
/// Generation is warranted when something is urgent and either an urgent
/// name is missing from the last trigger set, or a name from that set no
/// longer exists in the pantry at all. Nothing is generated while a
/// generation is already running.
pub fn decide(
    state: &TriggerState,
    items: &[PantryItem],
    today: NaiveDate,
    phase: TriggerPhase,
) -> TriggerDecision {
    let bands = partition(items, today);
    let urgent_names = bands.urgent_names();

    let pantry_names: BTreeSet<&str> = items.iter().map(|item| item.name.as_str()).collect();

    let new_urgent_names: Vec<String> = urgent_names
        .difference(&state.last_triggered_item_names)
        .cloned()
        .collect();

    let removed_names: Vec<String> = state
        .last_triggered_item_names
        .iter()
        .filter(|name| !pantry_names.contains(name.as_str()))
        .cloned()
        .collect();

    let should_generate = !urgent_names.is_empty()
        && (!new_urgent_names.is_empty() || !removed_names.is_empty())
        && phase != TriggerPhase::Generating;

    let reason = if !should_generate {
        None
    } else if !removed_names.is_empty() {
        Some(TriggerReason::ItemsRemoved {
            names: removed_names.clone(),
        })
    } else {
        Some(TriggerReason::NewUrgentItems)
    };

    TriggerDecision {
        critical_count: bands.critical.len(),
        expiring_count: bands.expiring.len(),
        urgent_items: bands.urgent().cloned().collect(),
        urgent_names: urgent_names.into_iter().collect(),
        new_urgent_names,
        removed_names,
        should_generate,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry::entities::PantryItemConfig;
    use chrono::Days;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 24).unwrap()
    }

    fn item(name: &str, days: i64) -> PantryItem {
        let expiry_date = if days >= 0 {
            today() + Days::new(days as u64)
        } else {
            today() - Days::new(days.unsigned_abs())
        };

        PantryItem::new(PantryItemConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: 1.0,
            unit: "unit".to_string(),
            expiry_date,
            added_date: None,
        })
    }

    #[test]
    fn test_first_evaluation_with_urgent_items_generates() {
        let pantry = vec![item("Milk", 1), item("Spinach", -2)];

        let decision = decide(&TriggerState::default(), &pantry, today(), TriggerPhase::Idle);

        assert!(decision.should_generate);
        assert_eq!(decision.critical_count, 2);
        assert_eq!(decision.urgent_names, vec!["Milk", "Spinach"]);
        assert_eq!(decision.reason, Some(TriggerReason::NewUrgentItems));
    }

    #[test]
    fn test_unchanged_pantry_does_not_generate_again() {
        let pantry = vec![item("Milk", 1), item("Spinach", -2)];
        let state = TriggerState::new(["Milk", "Spinach"]);

        let decision = decide(&state, &pantry, today(), TriggerPhase::Idle);

        assert!(!decision.should_generate);
        assert!(decision.reason.is_none());
    }

    #[test]
    fn test_removed_trigger_item_regenerates() {
        let pantry = vec![item("Milk", 1), item("Rice", 30)];
        let state = TriggerState::new(["Milk", "Spinach"]);

        let decision = decide(&state, &pantry, today(), TriggerPhase::Idle);

        assert!(decision.should_generate);
        assert!(decision.new_urgent_names.is_empty());
        assert_eq!(decision.removed_names, vec!["Spinach"]);
        assert_eq!(
            decision.reason,
            Some(TriggerReason::ItemsRemoved {
                names: vec!["Spinach".to_string()]
            })
        );
    }

    #[test]
    fn test_new_urgent_item_regenerates() {
        let pantry = vec![item("A", 2), item("C", 0)];
        let state = TriggerState::new(["A"]);

        let decision = decide(&state, &pantry, today(), TriggerPhase::Idle);

        assert!(decision.should_generate);
        assert_eq!(decision.new_urgent_names, vec!["C"]);
    }

    #[test]
    fn test_demoted_item_still_in_pantry_is_not_a_removal() {
        // "A" is no longer urgent (expiry pushed out) but still exists.
        let pantry = vec![item("A", 10), item("B", 1)];
        let state = TriggerState::new(["A", "B"]);

        let decision = decide(&state, &pantry, today(), TriggerPhase::Idle);

        assert!(decision.removed_names.is_empty());
        assert!(!decision.should_generate);
    }

    #[test]
    fn test_removal_without_remaining_urgent_items_does_not_generate() {
        let pantry = vec![item("Rice", 30)];
        let state = TriggerState::new(["Milk"]);

        let decision = decide(&state, &pantry, today(), TriggerPhase::Idle);

        assert_eq!(decision.removed_names, vec!["Milk"]);
        assert!(!decision.should_generate);
    }

    #[test]
    fn test_generating_phase_blocks_generation() {
        let pantry = vec![item("Milk", 0)];

        let decision = decide(
            &TriggerState::default(),
            &pantry,
            today(),
            TriggerPhase::Generating,
        );

        assert!(!decision.should_generate);
    }

    #[test]
    fn test_urgent_items_are_ordered_critical_first() {
        let pantry = vec![item("Yogurt", 3), item("Milk", 1)];

        let decision = decide(&TriggerState::default(), &pantry, today(), TriggerPhase::Idle);

        let names: Vec<&str> = decision.urgent_items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Yogurt"]);
        assert_eq!(decision.expiring_count, 1);
        assert!(decision.should_alert());
    }
}
