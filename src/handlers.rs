use crate::errors::AppError;
use crate::models::{
    DashboardData, LoginRequest, PunchOutcome, PunchRequest, SessionStatus, TimePunch,
};
use crate::session::{token_from_cookies, SESSION_COOKIE};
use crate::state::AppState;
use crate::summary::{derive_months, sort_punches};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use tracing::{error, info};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_employees(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let employees = state
        .sheets
        .list_employees()
        .await
        .map_err(|err| upstream("employee roster fetch failed", err))?;
    Ok(Json(employees))
}

#[derive(Debug, Deserialize)]
pub struct PunchesQuery {
    pub name: String,
}

pub async fn get_punches(
    State(state): State<AppState>,
    Query(query): Query<PunchesQuery>,
) -> Result<Json<Vec<TimePunch>>, AppError> {
    let name = query.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Por favor, selecione um colaborador."));
    }

    Ok(Json(todays_punches(&state, name).await?))
}

pub async fn record_punch(
    State(state): State<AppState>,
    Json(request): Json<PunchRequest>,
) -> Result<Json<PunchOutcome>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Por favor, selecione um colaborador."));
    }

    let recorded = state
        .sheets
        .record_punch(name, request.punch_type, Local::now())
        .await
        .map_err(|err| upstream("punch record failed", err))?;
    info!(name, punch = recorded.punch_type.label(), time = %recorded.time, "punch recorded");

    // The list shown to the user always reflects a fresh read after a
    // successful record.
    let punches = todays_punches(&state, name).await?;

    Ok(Json(PunchOutcome { recorded, punches }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !state.policy.verify(&request.password) {
        return Err(AppError::unauthorized("Senha incorreta."));
    }

    let token = state.sessions.open().await;
    info!("dashboard session opened");
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(SessionStatus {
            authenticated: true,
        }),
    ))
}

pub async fn session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionStatus> {
    let authenticated = match session_token(&headers) {
        Some(token) => state.sessions.is_active(token).await,
        None => false,
    };
    Json(SessionStatus { authenticated })
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers) {
        if state.sessions.close(token).await {
            info!("dashboard session closed");
        }
    }
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");

    (
        [(header::SET_COOKIE, cookie)],
        Json(SessionStatus {
            authenticated: false,
        }),
    )
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardData>, AppError> {
    require_session(&state, &headers).await?;

    // Roster and totals are issued together; either failure fails the batch.
    let (employees, worked_hours) = tokio::try_join!(
        state.sheets.list_employees(),
        state.sheets.list_worked_hours()
    )
    .map_err(|err| upstream("dashboard fetch failed", err))?;

    let months = derive_months(&worked_hours);

    Ok(Json(DashboardData {
        employees,
        months,
        worked_hours,
    }))
}

async fn todays_punches(state: &AppState, name: &str) -> Result<Vec<TimePunch>, AppError> {
    let today = Local::now().date_naive();
    let mut punches = state
        .sheets
        .list_punches_for_day(name, today)
        .await
        .map_err(|err| upstream("day punches fetch failed", err))?;
    sort_punches(&mut punches);
    Ok(punches)
}

async fn require_session(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    if let Some(token) = session_token(headers) {
        if state.sessions.is_active(token).await {
            return Ok(());
        }
    }
    Err(AppError::unauthorized("Acesso restrito."))
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_cookies)
}

fn upstream(context: &str, err: crate::sheets::SheetsError) -> AppError {
    error!("{context}: {err}");
    err.into()
}
