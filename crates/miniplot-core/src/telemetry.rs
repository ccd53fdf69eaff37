// File: crates/miniplot-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber for hosts that load miniplot without their own logging.

/// Environment variable consulted before `RUST_LOG` for the log filter.
pub const LOG_ENV: &str = "MINIPLOT_LOG";

/// Install a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `MINIPLOT_LOG`, then `RUST_LOG`, then defaults to `info`.
/// Returns `false` when the feature is off or the host already installed a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
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
