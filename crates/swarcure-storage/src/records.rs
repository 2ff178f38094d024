//! Per-user record operations on top of a [`KeyValueStore`].

use swarcure_core::keys::{self, RecordKind};
use swarcure_core::models::assessment::{AssessmentRecord, AssessmentResult};
use swarcure_core::models::progress::ProgressEntry;
use swarcure_core::user::UserId;
use tracing::info;

use crate::KeyValueStore;
use crate::error::StorageError;
use crate::state::{load_state, load_state_opt, save_state};

/// Persist a completed assessment to history and as the latest snapshot.
pub fn save_assessment(
    store: &dyn KeyValueStore,
    record: &AssessmentRecord,
) -> Result<(), StorageError> {
    save_state(store, &keys::assessment(&record.user_id, record.id), record)?;
    save_state(
        store,
        &keys::record(&record.user_id, RecordKind::LatestAssessment),
        &record.result,
    )?;
    info!(user = %record.user_id, assessment = %record.id, "assessment saved");
    Ok(())
}

/// The most recent snapshot, exactly as it was stored.
pub fn latest_assessment(
    store: &dyn KeyValueStore,
    user: &UserId,
) -> Result<Option<AssessmentResult>, StorageError> {
    load_state_opt(store, &keys::record(user, RecordKind::LatestAssessment))
}

/// Every stored assessment for `user`, oldest first.
pub fn list_assessments(
    store: &dyn KeyValueStore,
    user: &UserId,
) -> Result<Vec<AssessmentRecord>, StorageError> {
    let mut records = Vec::new();
    for key in store.list(&keys::assessments_prefix(user))? {
        let record: AssessmentRecord = load_state(store, &key)?;
        records.push(record);
    }
    records.sort_by_key(|r| r.completed_at);
    Ok(records)
}

/// The user's therapy journal; empty if nothing has been logged.
pub fn load_progress(
    store: &dyn KeyValueStore,
    user: &UserId,
) -> Result<Vec<ProgressEntry>, StorageError> {
    Ok(load_state_opt(store, &keys::record(user, RecordKind::TherapyProgress))?.unwrap_or_default())
}

/// Append one session to the journal and return the journal length.
pub fn append_progress(
    store: &dyn KeyValueStore,
    user: &UserId,
    entry: ProgressEntry,
) -> Result<usize, StorageError> {
    let mut entries = load_progress(store, user)?;
    entries.push(entry);
    save_state(
        store,
        &keys::record(user, RecordKind::TherapyProgress),
        &entries,
    )?;
    info!(user = %user, entries = entries.len(), "progress logged");
    Ok(entries.len())
}
