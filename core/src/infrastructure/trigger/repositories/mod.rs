pub mod trigger_state_repository;
