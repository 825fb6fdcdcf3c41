use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddPantryItemValidator {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "category must be at most 255 characters"))]
    pub category: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: f64,

    #[serde(default)]
    #[validate(length(max = 64, message = "unit must be at most 64 characters"))]
    pub unit: String,

    /// Calendar date, `YYYY-MM-DD`.
    pub expiry_date: NaiveDate,

    #[serde(default)]
    pub added_date: Option<NaiveDate>,
}

fn default_quantity() -> f64 {
    1.0
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePantryItemValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "category must be at most 255 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "quantity must not be negative"))]
    pub quantity: Option<f64>,

    #[serde(default)]
    #[validate(length(max = 64, message = "unit must be at most 64 characters"))]
    pub unit: Option<String>,

    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}
