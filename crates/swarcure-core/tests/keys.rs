use swarcure_core::keys::{self, RecordKind};
use swarcure_core::user::UserId;
use uuid::Uuid;

#[test]
fn records_are_scoped_by_user() {
    let alice = UserId::parse("alice").unwrap();
    let bob = UserId::parse("bob").unwrap();

    assert_eq!(
        keys::record(&alice, RecordKind::LatestAssessment),
        "users/alice/assessment-results.json"
    );
    assert_eq!(
        keys::record(&alice, RecordKind::TherapyProgress),
        "users/alice/therapy-progress.json"
    );
    assert_ne!(
        keys::record(&alice, RecordKind::TherapyProgress),
        keys::record(&bob, RecordKind::TherapyProgress)
    );
}

#[test]
fn assessment_keys_live_under_the_history_prefix() {
    let user = UserId::parse("user-42").unwrap();
    let id = Uuid::new_v4();

    let key = keys::assessment(&user, id);
    assert!(key.starts_with(&keys::assessments_prefix(&user)));
    assert!(key.starts_with(&keys::user_prefix(&user)));
    assert!(key.ends_with(&format!("{id}.json")));
}

#[test]
fn user_ids_that_escape_their_prefix_are_rejected() {
    for raw in ["", "a/b", "..", "x..y", "has space", "back\\slash"] {
        assert!(UserId::parse(raw).is_err(), "{raw:?} should be rejected");
    }
    assert_eq!(UserId::parse("patient_7").unwrap().as_str(), "patient_7");
}

#[test]
fn user_id_deserialization_validates() {
    let ok: UserId = serde_json::from_str("\"carol\"").unwrap();
    assert_eq!(ok.to_string(), "carol");

    let err = serde_json::from_str::<UserId>("\"../etc\"");
    assert!(err.is_err());
}
