//! Therapy recommendation from the combined mental and physical score.

use swarcure_core::models::therapy::{Condition, TherapyPlan, Tier};

use crate::catalog::Category;
use crate::error::AssessmentError;

/// Fixed content of one recommendation tier.
#[derive(Debug, Clone, Copy)]
pub struct TierRule {
    /// Inclusive bounds on `mental + physical`.
    pub min_total: u8,
    pub max_total: u8,
    pub tier: Tier,
    pub ragas: &'static [&'static str],
    pub frequencies: &'static [&'static str],
    pub duration_minutes: u32,
    pub sessions_per_day: u32,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const TIERS: &[TierRule] = &[
    TierRule {
        min_total: 0,
        max_total: 9,
        tier: Tier::Mild,
        ragas: &["Raag Bhimpalasi (Morning)", "Raag Desh (Evening)"],
        frequencies: &["432 Hz (Alpha waves - relaxation)"],
        duration_minutes: 15,
        sessions_per_day: 1,
        duration: "15 minutes daily",
        description: "Gentle ragas for maintaining mental wellness and relaxation.",
    },
    TierRule {
        min_total: 10,
        max_total: 19,
        tier: Tier::Moderate,
        ragas: &[
            "Raag Bhairav (Morning)",
            "Raag Bhimpalasi (Afternoon)",
            "Raag Darbari (Night)",
        ],
        frequencies: &["432 Hz (Alpha waves)", "528 Hz (Transformation)"],
        duration_minutes: 20,
        sessions_per_day: 2,
        duration: "20 minutes, twice daily",
        description: "Moderate intensity ragas for stress reduction and mood enhancement.",
    },
    TierRule {
        min_total: 20,
        max_total: 54,
        tier: Tier::Severe,
        ragas: &[
            "Raag Ahir Bhairav (Dawn)",
            "Raag Bhupali (Evening)",
            "Raag Darbari (Night)",
        ],
        frequencies: &[
            "396 Hz (Root chakra)",
            "528 Hz (Heart chakra)",
            "639 Hz (Third eye)",
        ],
        duration_minutes: 30,
        sessions_per_day: 2,
        duration: "30 minutes, twice daily",
        description: "Intensive raga therapy for significant symptoms, with multi-frequency sessions.",
    },
];

/// Select the plan for a pair of category scores.
///
/// The mild tier always targets anxiety. Higher tiers target depression when
/// the mental score strictly exceeds the physical score, stress otherwise.
pub fn recommend(mental_score: u8, physical_score: u8) -> TherapyPlan {
    let total = mental_score.saturating_add(physical_score);
    let rule = tier_for(total);

    let condition = match rule.tier {
        Tier::Mild => Condition::Anxiety,
        Tier::Moderate | Tier::Severe if mental_score > physical_score => Condition::Depression,
        Tier::Moderate | Tier::Severe => Condition::Stress,
    };

    TherapyPlan {
        ragas: rule.ragas.iter().map(|s| s.to_string()).collect(),
        frequencies: rule.frequencies.iter().map(|s| s.to_string()).collect(),
        duration_minutes: rule.duration_minutes,
        sessions_per_day: rule.sessions_per_day,
        duration: rule.duration.to_string(),
        description: rule.description.to_string(),
        condition,
        severity: rule.tier,
    }
}

/// [`recommend`] for scores that did not come from a scored response set.
pub fn recommend_checked(
    mental_score: u8,
    physical_score: u8,
) -> Result<TherapyPlan, AssessmentError> {
    for (category, score) in [
        (Category::Mental, mental_score),
        (Category::Physical, physical_score),
    ] {
        let max = category.max_score();
        if score > max {
            return Err(AssessmentError::ScoreOutOfRange {
                category,
                score,
                max,
            });
        }
    }
    Ok(recommend(mental_score, physical_score))
}

/// The tier whose range contains `total`; totals past the table use the top tier.
pub fn tier_for(total: u8) -> &'static TierRule {
    TIERS
        .iter()
        .find(|r| (r.min_total..=r.max_total).contains(&total))
        .unwrap_or(&TIERS[TIERS.len() - 1])
}
