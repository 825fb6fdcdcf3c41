pub mod pantry_item_repository;
