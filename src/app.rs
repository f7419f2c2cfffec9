use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/update", post(handlers::update))
        .route("/api/selection", get(handlers::get_selection))
        .with_state(state)
}
