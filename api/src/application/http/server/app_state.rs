use std::sync::Arc;

use dishscale_core::application::DishscaleService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DishscaleService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DishscaleService) -> Self {
        Self { args, service }
    }
}
