use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{AppError, Result};

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `omnikassa` logs at `default_level`.
/// Returns a configuration error when a subscriber is already installed.
pub fn init_tracing(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("omnikassa={}", default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| AppError::configuration(format!("Failed to initialize tracing: {}", e)))
}
