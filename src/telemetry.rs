//! Opt-in tracing setup for binaries using `candle-plot`.
//!
//! The library only emits `tracing` events; hosts either call one of these
//! helpers or install their own subscriber.

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "candle_plot=info";

/// Installs a compact `tracing-subscriber` fmt subscriber filtered by
/// `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
