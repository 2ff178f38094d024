use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use swarcure_core::models::therapy::TherapyPlan;
use swarcure_instruments::recommend;

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct ScoreQuery {
    mental: u8,
    physical: u8,
}

pub async fn get_recommendation(
    Query(query): Query<ScoreQuery>,
) -> Result<Json<TherapyPlan>, ApiError> {
    let plan = recommend::recommend_checked(query.mental, query.physical)?;
    Ok(Json(plan))
}
