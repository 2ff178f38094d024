use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The condition a therapy plan targets. Also selects the music catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    Anxiety,
    Depression,
    Stress,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Anxiety => "anxiety",
            Condition::Depression => "depression",
            Condition::Stress => "stress",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anxiety" => Ok(Condition::Anxiety),
            "depression" => Ok(Condition::Depression),
            "stress" => Ok(Condition::Stress),
            _ => Err(CoreError::UnknownCondition(s.to_string())),
        }
    }
}

/// Recommendation bucket that drives content lists and session length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tier {
    Mild,
    Moderate,
    Severe,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Mild => "mild",
            Tier::Moderate => "moderate",
            Tier::Severe => "severe",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sound therapy recommendation. Selected from a fixed table, never
/// assembled piecemeal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TherapyPlan {
    pub ragas: Vec<String>,
    pub frequencies: Vec<String>,
    /// Length of a single session.
    pub duration_minutes: u32,
    pub sessions_per_day: u32,
    /// Display form, e.g. "20 minutes, twice daily".
    pub duration: String,
    pub description: String,
    pub condition: Condition,
    pub severity: Tier,
}
