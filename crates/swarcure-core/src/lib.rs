//! swarcure-core
//!
//! Pure domain types, user identity, and storage key conventions.
//! No I/O. This is the shared vocabulary of the SwarCure system.

pub mod error;
pub mod keys;
pub mod models;
pub mod user;
