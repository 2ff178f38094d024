use swarcure_core::models::therapy::{Condition, Tier};
use swarcure_instruments::catalog::Category;
use swarcure_instruments::error::AssessmentError;
use swarcure_instruments::recommend::{TIERS, recommend, recommend_checked, tier_for};

#[test]
fn mild_tier_always_targets_anxiety() {
    let plan = recommend(5, 0);
    assert_eq!(plan.severity, Tier::Mild);
    assert_eq!(plan.condition, Condition::Anxiety);
    assert_eq!(plan.duration, "15 minutes daily");
    assert_eq!(plan.duration_minutes, 15);
    assert_eq!(plan.sessions_per_day, 1);
    assert_eq!(plan.ragas.len(), 2);
    assert_eq!(plan.frequencies.len(), 1);

    assert_eq!(recommend(0, 9).condition, Condition::Anxiety);
}

#[test]
fn moderate_tie_goes_to_stress() {
    let plan = recommend(8, 8);
    assert_eq!(plan.severity, Tier::Moderate);
    assert_eq!(plan.condition, Condition::Stress);
    assert_eq!(plan.duration, "20 minutes, twice daily");
    assert_eq!(plan.ragas.len(), 3);
    assert_eq!(plan.frequencies.len(), 2);
}

#[test]
fn severe_with_dominant_mental_score_is_depression() {
    let plan = recommend(15, 10);
    assert_eq!(plan.severity, Tier::Severe);
    assert_eq!(plan.condition, Condition::Depression);
    assert_eq!(plan.duration, "30 minutes, twice daily");
    assert_eq!(plan.duration_minutes, 30);
    assert_eq!(plan.sessions_per_day, 2);
    assert_eq!(plan.frequencies.len(), 3);
}

#[test]
fn tier_boundaries() {
    assert_eq!(recommend(9, 0).severity, Tier::Mild);
    assert_eq!(recommend(10, 0).severity, Tier::Moderate);
    assert_eq!(recommend(0, 19).severity, Tier::Moderate);
    assert_eq!(recommend(0, 20).severity, Tier::Severe);
    assert_eq!(recommend(27, 27).severity, Tier::Severe);
    assert_eq!(tier_for(u8::MAX).tier, Tier::Severe);
}

#[test]
fn recommend_is_pure() {
    assert_eq!(recommend(12, 3), recommend(12, 3));
    assert_eq!(recommend(27, 27), recommend(27, 27));
}

#[test]
fn tier_table_covers_every_total() {
    assert_eq!(TIERS[0].min_total, 0);
    for pair in TIERS.windows(2) {
        assert_eq!(pair[0].max_total + 1, pair[1].min_total);
    }
    assert_eq!(TIERS.last().unwrap().max_total, 54);
}

#[test]
fn checked_recommendation_rejects_impossible_scores() {
    assert!(recommend_checked(27, 27).is_ok());
    assert_eq!(
        recommend_checked(28, 0).unwrap_err(),
        AssessmentError::ScoreOutOfRange {
            category: Category::Mental,
            score: 28,
            max: 27
        }
    );
    assert!(matches!(
        recommend_checked(0, 40),
        Err(AssessmentError::ScoreOutOfRange {
            category: Category::Physical,
            ..
        })
    ));
}
