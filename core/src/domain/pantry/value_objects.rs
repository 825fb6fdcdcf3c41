use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{pantry::entities::PantryItem, trigger::value_objects::EvaluationOutcome};

/// Three-way freshness shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    Fresh,
    Expiring,
    Expired,
}

impl FreshnessStatus {
    /// Dashboard ordering: most pressing first.
    pub fn sort_rank(self) -> u8 {
        match self {
            FreshnessStatus::Expired => 0,
            FreshnessStatus::Expiring => 1,
            FreshnessStatus::Fresh => 2,
        }
    }
}

/// Coarser banding used to decide recipe generation. Expired items fold
/// into `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyBand {
    Critical,
    Expiring,
    Stable,
}

#[derive(Debug, Clone)]
pub struct AddPantryItemInput {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub added_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePantryItemInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

/// An item together with the freshness derived for the evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PantryItemView {
    pub item: PantryItem,
    pub status: FreshnessStatus,
    pub days_until_expiry: i64,
}

impl PantryItemView {
    pub fn new(item: PantryItem, today: NaiveDate) -> Self {
        Self {
            status: item.status(today),
            days_until_expiry: item.days_until_expiry(today),
            item,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PantryStats {
    pub total: usize,
    pub fresh: usize,
    pub expiring: usize,
    pub expired: usize,
    pub needs_attention: usize,
    /// Share of fresh items, rounded to a whole percent. Zero for an empty pantry.
    pub saved_percentage: u32,
}

impl PantryStats {
    pub fn from_items(items: &[PantryItem], today: NaiveDate) -> Self {
        let mut stats = PantryStats {
            total: items.len(),
            ..Default::default()
        };

        for item in items {
            match item.status(today) {
                FreshnessStatus::Fresh => stats.fresh += 1,
                FreshnessStatus::Expiring => stats.expiring += 1,
                FreshnessStatus::Expired => stats.expired += 1,
            }
        }

        stats.needs_attention = stats.expiring + stats.expired;
        stats.saved_percentage = if stats.total > 0 {
            ((stats.fresh as f64 / stats.total as f64) * 100.0).round() as u32
        } else {
            0
        };

        stats
    }
}

/// Result of a pantry mutation plus the trigger evaluation it caused.
/// `evaluation` is `None` when the evaluation itself could not run.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PantryMutation {
    pub item: Option<PantryItemView>,
    pub evaluation: Option<EvaluationOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pantry::entities::PantryItemConfig;
    use uuid::Uuid;

    fn item(name: &str, expiry_date: NaiveDate) -> PantryItem {
        PantryItem::new(PantryItemConfig {
            user_id: Uuid::nil(),
            name: name.to_string(),
            category: "Dairy".to_string(),
            quantity: 1.0,
            unit: "carton".to_string(),
            expiry_date,
            added_date: None,
        })
    }

    #[test]
    fn test_stats_counts_and_percentage() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        let items = vec![
            item("Organic Milk", today + chrono::Days::new(1)),
            item("Fresh Spinach", today - chrono::Days::new(1)),
            item("Greek Yogurt", today + chrono::Days::new(4)),
        ];

        let stats = PantryStats::from_items(&items, today);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.fresh, 1);
        assert_eq!(stats.expiring, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.needs_attention, 2);
        assert_eq!(stats.saved_percentage, 33);
    }

    #[test]
    fn test_stats_empty_pantry() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 24).unwrap();
        let stats = PantryStats::from_items(&[], today);
        assert_eq!(stats, PantryStats::default());
    }
}
