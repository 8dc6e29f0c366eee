use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::report::Report;

use super::error::{AppError, AppResult};
use super::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Body of `POST /check-password`. Both fields may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct CheckPasswordRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /check-password
///
/// Evaluates the password and returns the report. A missing password yields
/// the empty-password report; a body that is not the expected JSON is a 400.
pub async fn check_password(
    State(state): State<AppState>,
    payload: Result<Json<CheckPasswordRequest>, JsonRejection>,
) -> AppResult<Json<Report>> {
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let password = request.password.map(|p| SecretString::new(p.into()));
    let report = state
        .engine
        .evaluate(password.as_ref(), request.username.as_deref());

    tracing::info!(
        verdict = %report.verdict,
        passed_checks = report.passed_checks,
        total_checks = report.total_checks,
        "Password checked"
    );

    Ok(Json(report))
}
