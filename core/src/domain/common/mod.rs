use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct ShelfLifeConfig {
    pub database: DatabaseConfig,
    pub llm: LLMConfig,
    pub recipe: RecipeConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

/// Tuning for the recipe generation pipeline.
#[derive(Clone, Debug)]
pub struct RecipeConfig {
    /// Hard cancellation boundary for one generation call.
    pub generation_timeout: Duration,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub recipe_history_limit: u64,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            generation_timeout: Duration::from_secs(15),
            temperature: 0.7,
            max_output_tokens: 2048,
            recipe_history_limit: 20,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Calendar date used for every expiry computation within one evaluation.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
