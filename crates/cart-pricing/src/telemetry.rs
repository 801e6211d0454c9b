//! Tracing subscriber setup for binaries and tests embedding the cart.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,cart_core=debug,cart_pricing=debug";

/// Installs a global fmt subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cart_pricing=trace` - Show trace for the lookup crate only
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}

/// Installs a subscriber that writes through the test harness capture.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with_test_writer()
        .try_init();
}
