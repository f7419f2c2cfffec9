pub mod app;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod query;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::router;
pub use catalog::load_catalog;
pub use config::Settings;
pub use state::AppState;
pub use sync::{DateCheck, Navigation, SelectorSync};
