//! Tracing initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from `LOG_LEVEL` and `LOG_FORMAT`
///
/// `RUST_LOG` takes precedence over `LOG_LEVEL` when set. `LOG_FORMAT=pretty`
/// switches to multi-line human output; anything else logs compact lines.
pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = if log_format == "pretty" {
        subscriber.pretty().try_init()
    } else {
        subscriber.compact().try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to initialize tracing: {}", e);
    }
}
