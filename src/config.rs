use crate::query::QueryEncoding;
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATE_WINDOW: u32 = 7;
const MAX_DATE_WINDOW: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub encoding: QueryEncoding,
    pub date_window: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: None,
            encoding: QueryEncoding::default(),
            date_window: DEFAULT_DATE_WINDOW,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let encoding = match lookup("SELECTOR_SYNC_ENCODING") {
            Some(value) => QueryEncoding::parse(&value).unwrap_or_else(|| {
                warn!("unknown SELECTOR_SYNC_ENCODING '{value}', using verbatim");
                defaults.encoding
            }),
            None => defaults.encoding,
        };

        let date_window = match lookup("SELECTOR_SYNC_DATE_WINDOW") {
            Some(value) => match value.parse::<u32>() {
                Ok(window) if window > MAX_DATE_WINDOW => {
                    warn!("SELECTOR_SYNC_DATE_WINDOW {window} exceeds {MAX_DATE_WINDOW}, capping");
                    MAX_DATE_WINDOW
                }
                Ok(window) if window > 0 => window,
                _ => {
                    warn!("invalid SELECTOR_SYNC_DATE_WINDOW '{value}', using {DEFAULT_DATE_WINDOW}");
                    defaults.date_window
                }
            },
            None => defaults.date_window,
        };

        Self {
            port,
            catalog_path: lookup("SELECTOR_SYNC_CATALOG").map(PathBuf::from),
            encoding,
            date_window,
        }
    }
}
