//! Severity bands for each category score.
//!
//! Bands are inclusive on both ends and contiguous, so a score on a boundary
//! belongs to exactly one band (5 is "Mild", not "Minimal"). Scores above the
//! last band's upper bound fall into the last band.

use swarcure_core::models::severity::{Interpretation, SeverityLevel};

/// One row of a threshold table.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: u8,
    pub max: u8,
    pub level: SeverityLevel,
    pub description: &'static str,
}

pub const MENTAL_BANDS: &[Band] = &MENTAL;
pub const PHYSICAL_BANDS: &[Band] = &PHYSICAL;
pub const IMPACT_BANDS: &[Band] = &IMPACT;

const MENTAL: [Band; 5] = [
    Band {
        min: 0,
        max: 4,
        level: SeverityLevel::Minimal,
        description: "You are experiencing minimal depressive symptoms.",
    },
    Band {
        min: 5,
        max: 9,
        level: SeverityLevel::Mild,
        description: "You are experiencing mild depressive symptoms.",
    },
    Band {
        min: 10,
        max: 14,
        level: SeverityLevel::Moderate,
        description: "You are experiencing moderate depressive symptoms.",
    },
    Band {
        min: 15,
        max: 19,
        level: SeverityLevel::ModeratelySevere,
        description: "You are experiencing moderately severe depressive symptoms.",
    },
    Band {
        min: 20,
        max: 27,
        level: SeverityLevel::Severe,
        description: "You are experiencing severe depressive symptoms.",
    },
];

const PHYSICAL: [Band; 3] = [
    Band {
        min: 0,
        max: 8,
        level: SeverityLevel::Minimal,
        description: "Your physical symptoms are minimal.",
    },
    Band {
        min: 9,
        max: 17,
        level: SeverityLevel::Mild,
        description: "You have mild physical symptoms.",
    },
    Band {
        min: 18,
        max: 27,
        level: SeverityLevel::Significant,
        description: "Your physical symptoms are significant.",
    },
];

const IMPACT: [Band; 4] = [
    Band {
        min: 0,
        max: 0,
        level: SeverityLevel::None,
        description: "No impact on daily functioning.",
    },
    Band {
        min: 1,
        max: 1,
        level: SeverityLevel::Mild,
        description: "Mild impact on daily functioning.",
    },
    Band {
        min: 2,
        max: 2,
        level: SeverityLevel::Moderate,
        description: "Moderate impact on daily functioning.",
    },
    Band {
        min: 3,
        max: 3,
        level: SeverityLevel::Severe,
        description: "Severe impact on daily functioning.",
    },
];

pub fn interpret_mental(score: u8) -> Interpretation {
    lookup(&MENTAL, score)
}

pub fn interpret_physical(score: u8) -> Interpretation {
    lookup(&PHYSICAL, score)
}

pub fn interpret_impact(score: u8) -> Interpretation {
    lookup(&IMPACT, score)
}

/// Find the band containing `score`, or the top band above the table.
fn lookup<const N: usize>(bands: &[Band; N], score: u8) -> Interpretation {
    const { assert!(N > 0, "severity band table is empty") };

    let band = bands
        .iter()
        .find(|b| (b.min..=b.max).contains(&score))
        .unwrap_or(&bands[N - 1]);

    Interpretation {
        level: band.level,
        description: band.description.to_string(),
    }
}
