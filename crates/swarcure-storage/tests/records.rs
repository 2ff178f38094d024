use swarcure_core::models::assessment::{AssessmentRecord, AssessmentResult};
use swarcure_core::models::progress::ProgressEntry;
use swarcure_core::models::severity::{Interpretation, SeverityLevel};
use swarcure_core::models::therapy::{Condition, TherapyPlan, Tier};
use swarcure_core::user::UserId;
use swarcure_storage::error::StorageError;
use swarcure_storage::memory::MemoryStore;
use swarcure_storage::records;
use swarcure_storage::state::load_state;
use uuid::Uuid;

fn interpretation(level: SeverityLevel) -> Interpretation {
    Interpretation {
        level,
        description: format!("{level} symptoms"),
    }
}

fn result(mental: u8) -> AssessmentResult {
    AssessmentResult {
        mental_score: mental,
        mental_severity: interpretation(SeverityLevel::Mild),
        physical_score: 2,
        physical_severity: interpretation(SeverityLevel::Minimal),
        impact_score: 1,
        impact_severity: interpretation(SeverityLevel::Mild),
        recommended_therapy: TherapyPlan {
            ragas: vec!["Raag Desh (Evening)".to_string()],
            frequencies: vec!["432 Hz".to_string()],
            duration_minutes: 15,
            sessions_per_day: 1,
            duration: "15 minutes daily".to_string(),
            description: "Gentle ragas.".to_string(),
            condition: Condition::Anxiety,
            severity: Tier::Mild,
        },
    }
}

fn record(user: &UserId, mental: u8, completed_at: &str) -> AssessmentRecord {
    AssessmentRecord {
        id: Uuid::new_v4(),
        user_id: user.clone(),
        completed_at: completed_at.parse().unwrap(),
        result: result(mental),
    }
}

#[test]
fn latest_snapshot_is_read_back_verbatim() {
    let store = MemoryStore::new();
    let user = UserId::parse("asha").unwrap();

    assert_eq!(records::latest_assessment(&store, &user).unwrap(), None);

    let first = record(&user, 5, "2025-01-01T10:00:00Z");
    let second = record(&user, 7, "2025-01-02T10:00:00Z");
    records::save_assessment(&store, &first).unwrap();
    records::save_assessment(&store, &second).unwrap();

    assert_eq!(
        records::latest_assessment(&store, &user).unwrap(),
        Some(second.result.clone())
    );
}

#[test]
fn history_is_oldest_first_and_scoped_to_the_user() {
    let store = MemoryStore::new();
    let asha = UserId::parse("asha").unwrap();
    let ravi = UserId::parse("ravi").unwrap();

    records::save_assessment(&store, &record(&asha, 9, "2025-03-02T00:00:00Z")).unwrap();
    records::save_assessment(&store, &record(&asha, 3, "2025-03-01T00:00:00Z")).unwrap();
    records::save_assessment(&store, &record(&ravi, 1, "2025-03-03T00:00:00Z")).unwrap();

    let history = records::list_assessments(&store, &asha).unwrap();
    let scores: Vec<u8> = history.iter().map(|r| r.result.mental_score).collect();
    assert_eq!(scores, vec![3, 9]);
    assert!(history.iter().all(|r| r.user_id == asha));

    assert_eq!(records::list_assessments(&store, &ravi).unwrap().len(), 1);
}

#[test]
fn progress_journal_appends() {
    let store = MemoryStore::new();
    let user = UserId::parse("meera").unwrap();
    assert!(records::load_progress(&store, &user).unwrap().is_empty());

    for minutes in [15, 20] {
        records::append_progress(
            &store,
            &user,
            ProgressEntry {
                date: jiff::Timestamp::UNIX_EPOCH,
                duration_minutes: minutes,
                completed: true,
                therapy: "Therapy for anxiety".to_string(),
            },
        )
        .unwrap();
    }

    let journal = records::load_progress(&store, &user).unwrap();
    assert_eq!(journal.len(), 2);
    assert_eq!(journal[1].duration_minutes, 20);
}

#[test]
fn load_state_reports_missing_keys() {
    let store = MemoryStore::new();
    let err = load_state::<Vec<u8>>(&store, "users/none/therapy-progress.json").unwrap_err();
    assert!(matches!(err, StorageError::NotFound { key } if key.ends_with("therapy-progress.json")));
}
