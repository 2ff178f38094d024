//! A single pass through the questionnaire.
//!
//! The flow is strictly linear: Collecting → Scored → Interpreted →
//! Recommended → Logged. The only way back is [`AssessmentSession::restart`],
//! which discards every answer.

use std::fmt;

use serde::{Deserialize, Serialize};
use swarcure_core::models::assessment::AssessmentResult;
use swarcure_core::models::severity::Interpretation;
use ts_rs::TS;

use crate::error::AssessmentError;
use crate::responses::ResponseSet;
use crate::scoring::{self, CategoryScores};
use crate::{interpret, recommend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Collecting,
    Scored,
    Interpreted,
    Recommended,
    Logged,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Collecting => "collecting",
            Phase::Scored => "scored",
            Phase::Interpreted => "interpreted",
            Phase::Recommended => "recommended",
            Phase::Logged => "logged",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct Severities {
    mental: Interpretation,
    physical: Interpretation,
    impact: Interpretation,
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    phase: Phase,
    responses: ResponseSet,
    scores: Option<CategoryScores>,
    severities: Option<Severities>,
    result: Option<AssessmentResult>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Collecting,
            responses: ResponseSet::new(),
            scores: None,
            severities: None,
            result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Record an answer. Only allowed while collecting.
    pub fn answer(&mut self, question_id: u8, value: u8) -> Result<(), AssessmentError> {
        if self.phase != Phase::Collecting {
            return Err(AssessmentError::SessionClosed { phase: self.phase });
        }
        self.responses.record(question_id, value)?;
        Ok(())
    }

    /// Collecting → Scored. Fails without changing phase if any answer is missing.
    pub fn score(&mut self) -> Result<CategoryScores, AssessmentError> {
        self.expect_phase(Phase::Collecting)?;
        let scores = scoring::score(&self.responses)?;
        self.scores = Some(scores);
        self.phase = Phase::Scored;
        Ok(scores)
    }

    /// Scored → Interpreted.
    pub fn interpret(&mut self) -> Result<(), AssessmentError> {
        self.expect_phase(Phase::Scored)?;
        let scores = self.scores_or_err()?;
        self.severities = Some(Severities {
            mental: interpret::interpret_mental(scores.mental),
            physical: interpret::interpret_physical(scores.physical),
            impact: interpret::interpret_impact(scores.impact),
        });
        self.phase = Phase::Interpreted;
        Ok(())
    }

    /// Interpreted → Recommended, producing the final result.
    pub fn recommend(&mut self) -> Result<&AssessmentResult, AssessmentError> {
        self.expect_phase(Phase::Interpreted)?;
        let scores = self.scores_or_err()?;
        let severities = self.severities.take().ok_or(AssessmentError::OutOfOrder {
            expected: Phase::Interpreted,
            actual: self.phase,
        })?;

        let result = AssessmentResult {
            mental_score: scores.mental,
            mental_severity: severities.mental,
            physical_score: scores.physical,
            physical_severity: severities.physical,
            impact_score: scores.impact,
            impact_severity: severities.impact,
            recommended_therapy: recommend::recommend(scores.mental, scores.physical),
        };
        self.phase = Phase::Recommended;
        tracing::debug!(
            tier = %result.recommended_therapy.severity,
            condition = %result.recommended_therapy.condition,
            "therapy recommended"
        );
        Ok(&*self.result.insert(result))
    }

    /// Run every remaining step from Collecting through Recommended.
    pub fn complete(&mut self) -> Result<&AssessmentResult, AssessmentError> {
        self.score()?;
        self.interpret()?;
        self.recommend()
    }

    /// Recommended → Logged, once the result has been persisted.
    pub fn mark_logged(&mut self) -> Result<(), AssessmentError> {
        self.expect_phase(Phase::Recommended)?;
        self.phase = Phase::Logged;
        Ok(())
    }

    /// Discard all answers and derived state and start collecting again.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), AssessmentError> {
        if self.phase != expected {
            return Err(AssessmentError::OutOfOrder {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn scores_or_err(&self) -> Result<CategoryScores, AssessmentError> {
        self.scores.ok_or(AssessmentError::OutOfOrder {
            expected: Phase::Scored,
            actual: self.phase,
        })
    }
}
