pub mod common;
pub mod health;
pub mod pantry;
pub mod recipe;
pub mod trigger;
pub mod user_profile;

#[cfg(test)]
pub(crate) mod test_support;
