use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::pantry::{
    entities::PantryItem,
    value_objects::{FreshnessStatus, UrgencyBand},
};

/// Last day offset (inclusive) still classified as expiring.
pub const EXPIRING_WINDOW_DAYS: i64 = 3;

/// Last day offset (inclusive) counted as critical for recipe triggering.
pub const CRITICAL_WINDOW_DAYS: i64 = 1;

/// Whole calendar days from `today` until `expiry_date`. Negative once expired.
pub fn days_until_expiry(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiry_date - today).num_days()
}

pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> FreshnessStatus {
    let days = days_until_expiry(expiry_date, today);

    if days < 0 {
        FreshnessStatus::Expired
    } else if days <= EXPIRING_WINDOW_DAYS {
        FreshnessStatus::Expiring
    } else {
        FreshnessStatus::Fresh
    }
}

/// Classify against a wall-clock instant. Time of day is discarded.
pub fn classify_at(expiry_date: NaiveDate, now: DateTime<Utc>) -> FreshnessStatus {
    classify(expiry_date, now.date_naive())
}

pub fn urgency_band(days_until_expiry: i64) -> UrgencyBand {
    if days_until_expiry <= CRITICAL_WINDOW_DAYS {
        UrgencyBand::Critical
    } else if days_until_expiry <= EXPIRING_WINDOW_DAYS {
        UrgencyBand::Expiring
    } else {
        UrgencyBand::Stable
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrgencyPartition {
    pub critical: Vec<PantryItem>,
    pub expiring: Vec<PantryItem>,
    pub stable: Vec<PantryItem>,
}

impl UrgencyPartition {
    /// Critical items first, then expiring, each in pantry order.
    pub fn urgent(&self) -> impl Iterator<Item = &PantryItem> {
        self.critical.iter().chain(self.expiring.iter())
    }

    pub fn urgent_names(&self) -> BTreeSet<String> {
        self.urgent().map(|item| item.name.clone()).collect()
    }

    pub fn has_urgent(&self) -> bool {
        !self.critical.is_empty() || !self.expiring.is_empty()
    }
}

pub fn partition(items: &[PantryItem], today: NaiveDate) -> UrgencyPartition {
    let mut partition = UrgencyPartition::default();

    for item in items {
        match urgency_band(item.days_until_expiry(today)) {
            UrgencyBand::Critical => partition.critical.push(item.clone()),
            UrgencyBand::Expiring => partition.expiring.push(item.clone()),
            UrgencyBand::Stable => partition.stable.push(item.clone()),
        }
    }

    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry::entities::PantryItemConfig;
    use chrono::{Days, TimeZone};
    use uuid::Uuid;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 24).unwrap()
    }

    fn offset(days: i64) -> NaiveDate {
        if days >= 0 {
            today() + Days::new(days as u64)
        } else {
            today() - Days::new(days.unsigned_abs())
        }
    }

    fn item(name: &str, days: i64) -> PantryItem {
        PantryItem::new(PantryItemConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: "Vegetables".to_string(),
            quantity: 1.0,
            unit: "bag".to_string(),
            expiry_date: offset(days),
            added_date: None,
        })
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(offset(-1), today()), FreshnessStatus::Expired);
        assert_eq!(classify(offset(0), today()), FreshnessStatus::Expiring);
        assert_eq!(classify(offset(3), today()), FreshnessStatus::Expiring);
        assert_eq!(classify(offset(4), today()), FreshnessStatus::Fresh);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let statuses: Vec<u8> = (-10..=10)
            .map(|d| classify(offset(d), today()).sort_rank())
            .collect();
        assert!(statuses.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_classify_at_ignores_time_of_day() {
        let early = Utc.with_ymd_and_hms(2025, 6, 24, 0, 0, 1).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 6, 24, 23, 59, 59).unwrap();

        assert_eq!(classify_at(offset(0), early), FreshnessStatus::Expiring);
        assert_eq!(classify_at(offset(0), late), FreshnessStatus::Expiring);
        assert_eq!(classify_at(offset(4), late), FreshnessStatus::Fresh);
    }

    #[test]
    fn test_urgency_band_boundaries() {
        assert_eq!(urgency_band(-5), UrgencyBand::Critical);
        assert_eq!(urgency_band(1), UrgencyBand::Critical);
        assert_eq!(urgency_band(2), UrgencyBand::Expiring);
        assert_eq!(urgency_band(3), UrgencyBand::Expiring);
        assert_eq!(urgency_band(4), UrgencyBand::Stable);
    }

    #[test]
    fn test_partition_puts_expired_items_in_critical() {
        let items = vec![item("Old Bread", -5), item("Cheddar", 10)];

        let result = partition(&items, today());

        assert_eq!(result.critical.len(), 1);
        assert_eq!(result.critical[0].name, "Old Bread");
        assert_eq!(result.stable.len(), 1);
        assert!(result.expiring.is_empty());
    }

    #[test]
    fn test_partition_example_pantry() {
        let items = vec![item("Milk", 1), item("Spinach", -2), item("Yogurt", 3)];

        let result = partition(&items, today());

        let critical: Vec<&str> = result.critical.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(critical, vec!["Milk", "Spinach"]);
        assert_eq!(result.expiring[0].name, "Yogurt");
        assert_eq!(
            result.urgent_names(),
            BTreeSet::from(["Milk".to_string(), "Spinach".to_string(), "Yogurt".to_string()])
        );
    }

    #[test]
    fn test_partition_without_urgent_items() {
        let result = partition(&[item("Rice", 30)], today());
        assert!(!result.has_urgent());
        assert!(result.urgent_names().is_empty());
    }
}
