//! Storage key conventions.
//!
//! Pure string functions with no storage dependency. Every record lives under
//! its owner's prefix, so two users can never collide on a key.

use uuid::Uuid;

use crate::user::UserId;

/// Kinds of per-user record kept in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Snapshot of the most recent assessment, read back verbatim for display.
    LatestAssessment,
    /// Append-only journal of logged therapy sessions.
    TherapyProgress,
}

impl RecordKind {
    fn file_name(self) -> &'static str {
        match self {
            RecordKind::LatestAssessment => "assessment-results.json",
            RecordKind::TherapyProgress => "therapy-progress.json",
        }
    }
}

pub fn user_prefix(user: &UserId) -> String {
    format!("users/{user}/")
}

pub fn record(user: &UserId, kind: RecordKind) -> String {
    format!("users/{user}/{}", kind.file_name())
}

pub fn assessment(user: &UserId, id: Uuid) -> String {
    format!("users/{user}/assessments/{id}.json")
}

pub fn assessments_prefix(user: &UserId) -> String {
    format!("users/{user}/assessments/")
}
