use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    pantry::{
        freshness::{classify, days_until_expiry},
        value_objects::{FreshnessStatus, UpdatePantryItemInput},
    },
};

/// A perishable item in a user's pantry. Freshness is never stored here;
/// it is derived from `expiry_date` against the evaluation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PantryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub added_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PantryItemConfig {
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub added_date: Option<NaiveDate>,
}

impl PantryItem {
    pub fn new(config: PantryItemConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            name: config.name,
            category: config.category,
            quantity: config.quantity,
            unit: config.unit,
            expiry_date: config.expiry_date,
            added_date: config.added_date.unwrap_or_else(|| now.date_naive()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        days_until_expiry(self.expiry_date, today)
    }

    pub fn status(&self, today: NaiveDate) -> FreshnessStatus {
        classify(self.expiry_date, today)
    }

    pub fn update(&mut self, input: UpdatePantryItemInput) {
        let (now, _) = generate_timestamp();

        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(quantity) = input.quantity {
            self.quantity = quantity;
        }
        if let Some(unit) = input.unit {
            self.unit = unit;
        }
        if let Some(expiry_date) = input.expiry_date {
            self.expiry_date = expiry_date;
        }
        self.updated_at = now;
    }
}
