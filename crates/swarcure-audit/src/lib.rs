//! swarcure-audit
//!
//! Application-level audit events, emitted through `tracing` alongside the
//! request log.

pub mod events;
