//! swarcure-progress
//!
//! Statistics over a user's therapy journal: streaks, weekly compliance,
//! and today's progress against the recommended schedule. Pure functions of
//! the journal and an explicit `today`, so callers decide the clock.

pub mod stats;
