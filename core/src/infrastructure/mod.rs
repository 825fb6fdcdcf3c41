pub mod db;
pub mod health;
pub mod llm;
pub mod pantry;
pub mod recipe;
pub mod trigger;
pub mod user_profile;
