use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", post(handlers::search))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/provinces", get(handlers::get_provinces))
        .route("/api/filters", put(handlers::put_filters))
        .route("/api/refresh", post(handlers::refresh))
        .with_state(state)
}
