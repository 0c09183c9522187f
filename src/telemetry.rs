// ============================================================================
// Telemetry
// Subscriber setup for binaries and demos embedding this crate
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a formatting subscriber filtered by `RUST_LOG`, defaulting to
/// `exchange_view=debug`. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "exchange_view=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
