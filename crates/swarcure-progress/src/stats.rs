use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use swarcure_core::models::progress::ProgressEntry;
use ts_rs::TS;

/// Days counted by [`weekly_compliance`], ending today.
pub const COMPLIANCE_WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Streaks {
    pub current: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WeeklyCompliance {
    pub sessions_completed: u32,
    pub sessions_required: u32,
    /// Rounded percentage; exceeds 100 when extra sessions were logged.
    pub compliance_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TodayProgress {
    pub completed: u32,
    pub required: u32,
    /// Rounded percentage, capped at 100.
    pub progress: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressStats {
    pub today: Date,
    pub streaks: Streaks,
    pub weekly: WeeklyCompliance,
    pub today_progress: TodayProgress,
    pub total_minutes: u64,
    pub total_sessions: u32,
}

/// Compute every statistic for `today` with `sessions_per_day` required.
pub fn summarize(entries: &[ProgressEntry], sessions_per_day: u32, today: Date) -> ProgressStats {
    ProgressStats {
        today,
        streaks: streaks(entries, today),
        weekly: weekly_compliance(entries, sessions_per_day, today),
        today_progress: today_progress(entries, sessions_per_day, today),
        total_minutes: total_minutes(entries),
        total_sessions: u32::try_from(entries.len()).unwrap_or(u32::MAX),
    }
}

pub fn streaks(entries: &[ProgressEntry], today: Date) -> Streaks {
    let days = completed_days(entries);
    let current = current_streak(&days, today);

    let mut max: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<Date> = None;
    for day in &days {
        let consecutive = previous
            .and_then(|p| p.tomorrow().ok())
            .is_some_and(|next| next == *day);
        run = if consecutive { run + 1 } else { 1 };
        max = max.max(run);
        previous = Some(*day);
    }

    Streaks {
        current,
        max: max.max(current),
    }
}

pub fn weekly_compliance(
    entries: &[ProgressEntry],
    sessions_per_day: u32,
    today: Date,
) -> WeeklyCompliance {
    let per_day = completed_per_day(entries);
    let mut sessions_completed = 0;
    let mut day = today;
    for _ in 0..COMPLIANCE_WINDOW_DAYS {
        sessions_completed += per_day.get(&day).copied().unwrap_or(0);
        match day.yesterday() {
            Ok(d) => day = d,
            Err(_) => break,
        }
    }

    let sessions_required = sessions_per_day.saturating_mul(COMPLIANCE_WINDOW_DAYS);
    WeeklyCompliance {
        sessions_completed,
        sessions_required,
        compliance_rate: percent(sessions_completed, sessions_required),
    }
}

pub fn today_progress(entries: &[ProgressEntry], sessions_per_day: u32, today: Date) -> TodayProgress {
    let completed = completed_per_day(entries)
        .get(&today)
        .copied()
        .unwrap_or(0);
    TodayProgress {
        completed,
        required: sessions_per_day,
        progress: percent(completed, sessions_per_day).min(100),
    }
}

/// Minutes across every logged entry, finished or not.
pub fn total_minutes(entries: &[ProgressEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.duration_minutes)).sum()
}

fn completed_days(entries: &[ProgressEntry]) -> BTreeSet<Date> {
    entries.iter().filter(|e| e.completed).map(|e| e.day()).collect()
}

fn completed_per_day(entries: &[ProgressEntry]) -> BTreeMap<Date, u32> {
    let mut per_day = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.completed) {
        *per_day.entry(entry.day()).or_insert(0) += 1;
    }
    per_day
}

fn current_streak(days: &BTreeSet<Date>, today: Date) -> u32 {
    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.yesterday() {
            Ok(d) => day = d,
            Err(_) => break,
        }
    }
    streak
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(whole)) * 100.0).round() as u32
}
