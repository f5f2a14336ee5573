use crate::errors::AppError;
use crate::models::{ALL_PROVINCES, DashboardSnapshot, FilterUpdate, PROVINCES};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.dashboard.snapshot().await;
    Html(render_index(&snapshot))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.snapshot().await)
}

pub async fn get_provinces() -> Json<Vec<&'static str>> {
    let mut provinces = Vec::with_capacity(PROVINCES.len() + 1);
    provinces.push(ALL_PROVINCES);
    provinces.extend(PROVINCES);
    Json(provinces)
}

pub async fn put_filters(
    State(state): State<AppState>,
    Json(update): Json<FilterUpdate>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let snapshot = state.dashboard.update_filters(update).await?;
    Ok(Json(snapshot))
}

pub async fn refresh(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.refresh().await)
}

/// Form variant of "Buscar": apply the filters, run a cycle, show the page.
pub async fn search(
    State(state): State<AppState>,
    Form(update): Form<FilterUpdate>,
) -> Result<Redirect, AppError> {
    state.dashboard.update_filters(update).await?;
    state.dashboard.refresh().await;
    Ok(Redirect::to("/"))
}
