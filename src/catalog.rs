use crate::query::DATE_FORMAT;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// Option lists offered by the three selector controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OptionCatalog {
    pub products: Vec<String>,
    pub channels: Vec<String>,
    /// Newest first. Empty means a window of recent days is generated.
    pub dates: Vec<String>,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self {
            products: vec!["Firefox".into(), "FennecAndroid".into()],
            channels: vec!["nightly".into(), "beta".into(), "release".into()],
            dates: Vec::new(),
        }
    }
}

impl OptionCatalog {
    pub fn dates_for(&self, today: NaiveDate, window: u32) -> Vec<String> {
        if !self.dates.is_empty() {
            return self.dates.clone();
        }
        (0..i64::from(window.max(1)))
            .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
            .map(|date| date.format(DATE_FORMAT).to_string())
            .collect()
    }

    fn fill_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.products.is_empty() {
            self.products = defaults.products;
        }
        if self.channels.is_empty() {
            self.channels = defaults.channels;
        }
        self
    }
}

pub async fn load_catalog(path: &Path) -> OptionCatalog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<OptionCatalog>(&bytes) {
            Ok(catalog) => {
                info!("loaded option catalog from {}", path.display());
                catalog.fill_defaults()
            }
            Err(err) => {
                error!("failed to parse catalog file: {err}");
                OptionCatalog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => OptionCatalog::default(),
        Err(err) => {
            error!("failed to read catalog file: {err}");
            OptionCatalog::default()
        }
    }
}
