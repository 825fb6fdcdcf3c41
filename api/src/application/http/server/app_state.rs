use std::sync::Arc;

use shelflife_core::application::ShelfLifeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ShelfLifeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ShelfLifeService) -> Self {
        Self { args, service }
    }
}
