use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One logged therapy session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressEntry {
    pub date: jiff::Timestamp,
    pub duration_minutes: u32,
    pub completed: bool,
    pub therapy: String,
}

impl ProgressEntry {
    /// Calendar day (UTC) the session belongs to.
    pub fn day(&self) -> jiff::civil::Date {
        self.date.to_zoned(jiff::tz::TimeZone::UTC).date()
    }
}
