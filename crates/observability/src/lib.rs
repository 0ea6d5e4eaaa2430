//! Tracing, logging (shared setup).
//!
//! The entity model itself is inert; this crate gives producers, validators,
//! and test harnesses built on top of it one place to initialize logging.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
