use swarcure_instruments::catalog::{self, Category, QUESTION_COUNT};
use swarcure_instruments::error::AssessmentError;
use swarcure_instruments::responses::ResponseSet;
use swarcure_instruments::scoring::score;

fn all_answered(value: u8) -> ResponseSet {
    ResponseSet::from_answers((1..=19).map(|id| (id, value))).unwrap()
}

#[test]
fn catalog_has_nine_mental_nine_physical_one_impact() {
    let questions = catalog::questions();
    assert_eq!(questions.len(), QUESTION_COUNT);

    let count = |c: Category| questions.iter().filter(|q| q.category == c).count();
    assert_eq!(count(Category::Mental), 9);
    assert_eq!(count(Category::Physical), 9);
    assert_eq!(count(Category::Impact), 1);

    let ids: Vec<u8> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=19).collect::<Vec<u8>>());
}

#[test]
fn impact_uses_the_difficulty_scale() {
    let impact = catalog::scale(Category::Impact);
    assert_eq!(impact.label(0), Some("Not difficult at all"));
    assert_eq!(impact.label(3), Some("Extremely difficult"));

    let frequency = catalog::scale(Category::Mental);
    assert_eq!(frequency.label(2), Some("More than half the days"));
    assert!(std::ptr::eq(frequency, catalog::scale(Category::Physical)));
}

#[test]
fn category_maximums() {
    assert_eq!(Category::Mental.max_score(), 27);
    assert_eq!(Category::Physical.max_score(), 27);
    assert_eq!(Category::Impact.max_score(), 3);
}

#[test]
fn unknown_question_is_rejected() {
    let mut set = ResponseSet::new();
    assert_eq!(set.record(0, 1).unwrap_err(), AssessmentError::UnknownQuestion(0));
    assert_eq!(set.record(20, 1).unwrap_err(), AssessmentError::UnknownQuestion(20));
    assert!(set.is_empty());
}

#[test]
fn out_of_range_answer_is_rejected_not_clamped() {
    let mut set = ResponseSet::new();
    let err = set.record(3, 4).unwrap_err();
    assert_eq!(
        err,
        AssessmentError::AnswerOutOfRange {
            question_id: 3,
            value: 4,
            max: 3
        }
    );
    assert_eq!(set.get(3), None);
}

#[test]
fn answers_can_be_changed_before_scoring() {
    let mut set = ResponseSet::new();
    set.record(1, 3).unwrap().record(1, 0).unwrap();
    assert_eq!(set.get(1), Some(0));
    assert_eq!(set.len(), 1);
}

#[test]
fn completeness_requires_every_question() {
    let mut set = all_answered(1);
    assert!(set.is_complete());

    for missing in 1..=19u8 {
        let partial =
            ResponseSet::from_answers((1..=19).filter(|id| *id != missing).map(|id| (id, 1)))
                .unwrap();
        assert!(!partial.is_complete(), "missing {missing} should be incomplete");
        assert_eq!(partial.missing(), vec![missing]);
    }

    set = ResponseSet::new();
    assert!(!set.is_complete());
    assert_eq!(set.missing().len(), 19);
}

#[test]
fn incomplete_sets_are_not_scored_as_zero() {
    let partial = ResponseSet::from_answers([(1, 3), (2, 3), (19, 1)]).unwrap();
    match score(&partial) {
        Err(AssessmentError::Incomplete { missing }) => {
            assert_eq!(missing, (3..=18).collect::<Vec<u8>>());
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn scores_sum_by_category() {
    // mental: 1..=9 answered 0,1,2,3,0,1,2,3,0 = 12
    // physical: 10..=18 all 2 = 18
    let mut set = ResponseSet::new();
    for (i, id) in (1..=9u8).enumerate() {
        set.record(id, (i % 4) as u8).unwrap();
    }
    for id in 10..=18 {
        set.record(id, 2).unwrap();
    }
    set.record(19, 3).unwrap();

    let scores = score(&set).unwrap();
    assert_eq!(scores.mental, 12);
    assert_eq!(scores.physical, 18);
    assert_eq!(scores.impact, 3);
}

#[test]
fn scores_stay_in_range_for_extreme_sets() {
    let low = score(&all_answered(0)).unwrap();
    assert_eq!((low.mental, low.physical, low.impact), (0, 0, 0));

    let high = score(&all_answered(3)).unwrap();
    assert_eq!((high.mental, high.physical, high.impact), (27, 27, 3));
}
