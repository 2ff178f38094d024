//! swarcure-instruments
//!
//! The wellness questionnaire and everything derived from it. Pure data and
//! pure functions with no storage or network dependency. Covers the question
//! catalog, answer collection, category scoring, severity bands, therapy
//! recommendation, and the music catalog each recommendation points at.

pub mod catalog;
pub mod error;
pub mod interpret;
pub mod music;
pub mod recommend;
pub mod responses;
pub mod scoring;
pub mod session;

use swarcure_core::models::assessment::AssessmentResult;

use error::AssessmentError;
use responses::ResponseSet;

/// Score, interpret, and recommend in one step.
///
/// Fails with [`AssessmentError::Incomplete`] unless every question has an
/// answer.
pub fn evaluate(responses: &ResponseSet) -> Result<AssessmentResult, AssessmentError> {
    let scores = scoring::score(responses)?;
    Ok(AssessmentResult {
        mental_score: scores.mental,
        mental_severity: interpret::interpret_mental(scores.mental),
        physical_score: scores.physical,
        physical_severity: interpret::interpret_physical(scores.physical),
        impact_score: scores.impact,
        impact_severity: interpret::interpret_impact(scores.impact),
        recommended_therapy: recommend::recommend(scores.mental, scores.physical),
    })
}
