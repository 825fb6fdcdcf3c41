pub mod health;
pub mod pantry;
pub mod recipe;
pub mod server;
pub mod user_profile;
