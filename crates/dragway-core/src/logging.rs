#![forbid(unsafe_code)]

//! Tracing re-exports and optional JSON subscriber setup.
//!
//! With the `tracing` feature enabled the reducer emits structured events at
//! session transitions. This module re-exports the macros so downstream
//! crates can log through `dragway_core` without their own `tracing`
//! dependency. The `tracing-json` feature additionally offers an opt-in
//! JSON subscriber for production logging.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a JSON-formatted global subscriber honoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
#[cfg(feature = "tracing-json")]
pub fn init_json() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .is_ok()
}

#[cfg(all(test, feature = "tracing-json"))]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init_json();
        // A subscriber is installed by now, so a repeat attempt must fail.
        assert!(!init_json());
    }
}
