use std::sync::Arc;

use culinary_core::application::CulinaryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CulinaryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CulinaryService) -> Self {
        Self { args, service }
    }
}
