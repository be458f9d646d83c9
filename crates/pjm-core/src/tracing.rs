use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing: JSON format, filtered through the
/// `RUST_LOG` env var. Call once from `main` before anything logs.
///
/// Repeated calls are silently ignored, which keeps tests that share a
/// process from panicking on double registration.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
