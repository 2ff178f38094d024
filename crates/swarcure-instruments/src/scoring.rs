use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::{self, Category};
use crate::error::AssessmentError;
use crate::responses::ResponseSet;

/// Per-category totals for a complete response set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScores {
    /// 0–27.
    pub mental: u8,
    /// 0–27.
    pub physical: u8,
    /// 0–3.
    pub impact: u8,
}

/// Sum the answers of each category.
///
/// Missing answers are never treated as zero: an incomplete set is rejected
/// with the list of unanswered question ids.
pub fn score(responses: &ResponseSet) -> Result<CategoryScores, AssessmentError> {
    let missing = responses.missing();
    if !missing.is_empty() {
        return Err(AssessmentError::Incomplete { missing });
    }

    let mut scores = CategoryScores {
        mental: 0,
        physical: 0,
        impact: 0,
    };
    for question in catalog::questions() {
        let value = responses.get(question.id).unwrap_or_default();
        let total = match question.category {
            Category::Mental => &mut scores.mental,
            Category::Physical => &mut scores.physical,
            Category::Impact => &mut scores.impact,
        };
        *total += value;
    }

    tracing::debug!(
        mental = scores.mental,
        physical = scores.physical,
        impact = scores.impact,
        "assessment scored"
    );
    Ok(scores)
}
