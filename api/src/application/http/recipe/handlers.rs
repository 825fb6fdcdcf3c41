pub mod evaluate;
pub mod list_recipes;
pub mod record_click;
pub mod refresh;
