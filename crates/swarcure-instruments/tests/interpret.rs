use swarcure_core::models::severity::SeverityLevel;
use swarcure_instruments::interpret::{
    IMPACT_BANDS, MENTAL_BANDS, PHYSICAL_BANDS, interpret_impact, interpret_mental,
    interpret_physical,
};

#[test]
fn mental_band_boundaries() {
    let cases = [
        (0, SeverityLevel::Minimal),
        (4, SeverityLevel::Minimal),
        (5, SeverityLevel::Mild),
        (9, SeverityLevel::Mild),
        (10, SeverityLevel::Moderate),
        (14, SeverityLevel::Moderate),
        (15, SeverityLevel::ModeratelySevere),
        (19, SeverityLevel::ModeratelySevere),
        (20, SeverityLevel::Severe),
        (27, SeverityLevel::Severe),
    ];
    for (score, level) in cases {
        assert_eq!(interpret_mental(score).level, level, "mental score {score}");
    }
}

#[test]
fn physical_band_boundaries() {
    let cases = [
        (0, SeverityLevel::Minimal),
        (8, SeverityLevel::Minimal),
        (9, SeverityLevel::Mild),
        (17, SeverityLevel::Mild),
        (18, SeverityLevel::Significant),
        (27, SeverityLevel::Significant),
    ];
    for (score, level) in cases {
        assert_eq!(interpret_physical(score).level, level, "physical score {score}");
    }
}

#[test]
fn impact_is_exact_match_with_severe_catch_all() {
    assert_eq!(interpret_impact(0).level, SeverityLevel::None);
    assert_eq!(interpret_impact(1).level, SeverityLevel::Mild);
    assert_eq!(interpret_impact(2).level, SeverityLevel::Moderate);
    assert_eq!(interpret_impact(3).level, SeverityLevel::Severe);
    assert_eq!(interpret_impact(9).level, SeverityLevel::Severe);
}

#[test]
fn descriptions_accompany_levels() {
    assert_eq!(
        interpret_mental(12).description,
        "You are experiencing moderate depressive symptoms."
    );
    assert_eq!(
        interpret_physical(3).description,
        "Your physical symptoms are minimal."
    );
    assert_eq!(interpret_impact(0).description, "No impact on daily functioning.");
}

#[test]
fn band_tables_are_contiguous() {
    for bands in [MENTAL_BANDS, PHYSICAL_BANDS, IMPACT_BANDS] {
        assert_eq!(bands[0].min, 0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
    }
    assert_eq!(MENTAL_BANDS.last().unwrap().max, 27);
    assert_eq!(PHYSICAL_BANDS.last().unwrap().max, 27);
    assert_eq!(IMPACT_BANDS.last().unwrap().max, 3);
}

#[test]
fn scores_past_every_band_use_the_top_band() {
    assert_eq!(interpret_mental(u8::MAX).level, SeverityLevel::Severe);
    assert_eq!(interpret_physical(28).level, SeverityLevel::Significant);
    assert_eq!(
        interpret_impact(u8::MAX).description,
        "Severe impact on daily functioning."
    );
}
