//! Process-wide logging setup for the catalog API binary.

/// Initialize logging. Safe to call more than once.
pub fn init() {
    tracing::init();
}

pub mod tracing;
