//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

mod wipe_guard;

pub use wipe_guard::{
    GuardRailViolation, WipeGuard, DEFAULT_WEBROOT, FORBIDDEN_ROOTS, MIN_ROOT_LEN,
};
