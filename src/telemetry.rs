//! Opt-in tracing bootstrap.
//!
//! The library only emits `tracing` events and never installs a subscriber
//! behind the host's back. Hosts without their own subscriber can call
//! [`init_default_tracing`] once at startup; everyone else wires filters
//! themselves.

/// Installs a compact, env-filtered `tracing` subscriber.
///
/// Returns `false` without the `telemetry` feature, or when the host
/// already set a global subscriber; `true` once the subscriber is in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
