use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use swarcure_audit::events::{AuditEvent, action};
use swarcure_core::models::assessment::{AssessmentRecord, AssessmentResult};
use swarcure_instruments::session::AssessmentSession;
use swarcure_storage::records;

use super::parse_user;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAssessment {
    /// Question id → selected answer value.
    responses: BTreeMap<u8, u8>,
}

pub async fn submit_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(body): ApiJson<SubmitAssessment>,
) -> Result<(StatusCode, Json<AssessmentRecord>), ApiError> {
    let user_id = parse_user(user_id)?;

    let mut session = AssessmentSession::new();
    for (question_id, value) in body.responses {
        session.answer(question_id, value)?;
    }
    let result = session.complete()?.clone();

    // Timestamp under the lock so the latest snapshot is always the newest record.
    let record = {
        let _guard = state.write_lock.lock().await;
        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            user_id,
            completed_at: jiff::Timestamp::now(),
            result,
        };
        state
            .with_store(move |store| records::save_assessment(store, &record).map(|()| record))
            .await?
    };
    session.mark_logged()?;

    let plan = &record.result.recommended_therapy;
    AuditEvent::new(
        action::ASSESSMENT_COMPLETED,
        "assessment",
        record.id.to_string(),
        record.user_id.as_str(),
    )
    .with_details(json!({
        "tier": plan.severity,
        "condition": plan.condition,
    }))
    .emit();

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let user_id = parse_user(user_id)?;
    let history = state
        .with_store(move |store| records::list_assessments(store, &user_id))
        .await?;
    Ok(Json(history))
}

pub async fn get_latest_assessment(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<AssessmentResult>, ApiError> {
    let user_id = parse_user(user_id)?;
    let latest = state
        .with_store({
            let user_id = user_id.clone();
            move |store| records::latest_assessment(store, &user_id)
        })
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no assessment for user: {user_id}")))?;
    Ok(Json(latest))
}
