//! Integration test crate for ChromaShift.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on both chromashift crates to verify they work together.

#[cfg(test)]
mod correction;

#[cfg(test)]
mod session;

/// Install a test-writer subscriber once per test binary.
#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
