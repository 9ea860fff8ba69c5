use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/employees", get(handlers::get_employees))
        .route("/api/punches", get(handlers::get_punches))
        .route("/api/punch", post(handlers::record_punch))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/session", get(handlers::session_status))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}
