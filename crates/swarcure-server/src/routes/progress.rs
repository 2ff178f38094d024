use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use swarcure_audit::events::{AuditEvent, action};
use swarcure_core::models::progress::ProgressEntry;
use swarcure_core::models::therapy::TherapyPlan;
use swarcure_core::user::UserId;
use swarcure_progress::stats::{self, ProgressStats};
use swarcure_storage::records;

use super::parse_user;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Required sessions per day when the user has no recommendation yet.
const DEFAULT_SESSIONS_PER_DAY: u32 = 1;

/// Longest session that can be logged: one full day.
pub const MAX_SESSION_MINUTES: u32 = 24 * 60;

#[derive(Deserialize)]
pub struct LogSession {
    /// Title of the track played; defaults to "Therapy for {condition}".
    #[serde(default)]
    therapy: Option<String>,
    /// Defaults to the recommended session length.
    #[serde(default)]
    duration_minutes: Option<u32>,
    #[serde(default = "completed_by_default")]
    completed: bool,
}

fn completed_by_default() -> bool {
    true
}

#[derive(Deserialize)]
pub struct StatsQuery {
    /// Day to compute statistics for; defaults to the current UTC date.
    #[serde(default)]
    today: Option<jiff::civil::Date>,
}

pub async fn log_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<LogSession>,
) -> Result<(StatusCode, Json<ProgressEntry>), ApiError> {
    let user_id = parse_user(user_id)?;
    let plan = latest_plan(&state, &user_id).await?;

    let duration_minutes = body
        .duration_minutes
        .or(plan.as_ref().map(|p| p.duration_minutes))
        .ok_or_else(|| {
            ApiError::BadRequest(
                "duration_minutes is required before an assessment is completed".to_string(),
            )
        })?;
    if duration_minutes > MAX_SESSION_MINUTES {
        return Err(ApiError::BadRequest(format!(
            "duration_minutes must be at most {MAX_SESSION_MINUTES}, got {duration_minutes}"
        )));
    }
    let therapy = body
        .therapy
        .filter(|t| !t.trim().is_empty())
        .or_else(|| plan.as_ref().map(|p| format!("Therapy for {}", p.condition)))
        .ok_or_else(|| {
            ApiError::BadRequest(
                "therapy is required before an assessment is completed".to_string(),
            )
        })?;

    let entry = ProgressEntry {
        date: jiff::Timestamp::now(),
        duration_minutes,
        completed: body.completed,
        therapy,
    };

    let count = {
        let _guard = state.write_lock.lock().await;
        let user = user_id.clone();
        let logged = entry.clone();
        state
            .with_store(move |store| records::append_progress(store, &user, logged))
            .await?
    };

    AuditEvent::new(
        action::PROGRESS_LOGGED,
        "progress",
        count.to_string(),
        user_id.as_str(),
    )
    .with_details(json!({
        "therapy": entry.therapy,
        "duration_minutes": entry.duration_minutes,
        "completed": entry.completed,
    }))
    .emit();

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProgressEntry>>, ApiError> {
    let user_id = parse_user(user_id)?;
    let entries = state
        .with_store(move |store| records::load_progress(store, &user_id))
        .await?;
    Ok(Json(entries))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<ProgressStats>, ApiError> {
    let user_id = parse_user(user_id)?;
    let entries = state
        .with_store({
            let user_id = user_id.clone();
            move |store| records::load_progress(store, &user_id)
        })
        .await?;
    let sessions_per_day = latest_plan(&state, &user_id)
        .await?
        .map(|plan| plan.sessions_per_day)
        .unwrap_or(DEFAULT_SESSIONS_PER_DAY);

    let today = query.today.unwrap_or_else(|| {
        jiff::Timestamp::now()
            .to_zoned(jiff::tz::TimeZone::UTC)
            .date()
    });

    Ok(Json(stats::summarize(&entries, sessions_per_day, today)))
}

async fn latest_plan(state: &AppState, user_id: &UserId) -> Result<Option<TherapyPlan>, ApiError> {
    let user_id = user_id.clone();
    let latest = state
        .with_store(move |store| records::latest_assessment(store, &user_id))
        .await?;
    Ok(latest.map(|r| r.recommended_therapy))
}
