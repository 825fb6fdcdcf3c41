pub mod add_item;
pub mod get_stats;
pub mod list_items;
pub mod remove_item;
pub mod update_item;
