//! Telemetry helpers for hosts embedding `chart-pod`.
//!
//! Every diagnostic in the crate goes through `tracing`: gesture rejections and
//! missing callbacks at `debug`, partial renders at `trace`, option conflicts and
//! formatter fallbacks at `warn`. Hosts can call one of the helpers below or
//! install their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chart_pod=info";

/// `init_tracing(DEFAULT_FILTER)`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over `fallback_filter`. Returns `false` when the
/// feature is disabled or a global subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
