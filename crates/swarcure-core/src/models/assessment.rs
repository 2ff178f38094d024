use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::severity::Interpretation;
use super::therapy::TherapyPlan;
use crate::user::UserId;

/// Derived outcome of a completed questionnaire.
///
/// Persisted as a snapshot and read back verbatim; there is no schema
/// version, so changing this shape breaks previously stored history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub mental_score: u8,
    pub mental_severity: Interpretation,
    pub physical_score: u8,
    pub physical_severity: Interpretation,
    pub impact_score: u8,
    pub impact_severity: Interpretation,
    pub recommended_therapy: TherapyPlan,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    #[ts(type = "string")]
    pub user_id: UserId,
    pub completed_at: jiff::Timestamp,
    pub result: AssessmentResult,
}
