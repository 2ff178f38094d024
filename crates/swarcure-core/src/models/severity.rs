use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Band label shown next to a category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SeverityLevel {
    None,
    Minimal,
    Mild,
    Moderate,
    #[serde(rename = "Moderately Severe")]
    ModeratelySevere,
    Severe,
    Significant,
}

impl SeverityLevel {
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::None => "None",
            SeverityLevel::Minimal => "Minimal",
            SeverityLevel::Mild => "Mild",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::ModeratelySevere => "Moderately Severe",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::Significant => "Significant",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A severity band together with its user-facing explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: SeverityLevel,
    pub description: String,
}
