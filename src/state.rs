use crate::catalog::OptionCatalog;
use crate::config::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<OptionCatalog>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(catalog: OptionCatalog, settings: Settings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        }
    }
}
