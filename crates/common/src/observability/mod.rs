//! Tracing setup and log-safe helpers

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. With `json` set, events are
/// emitted as one JSON object per line. Returns `false` if a subscriber was
/// already installed (e.g. by another test).
pub fn init_tracing(json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.is_ok()
}

/// Log-safe rendering of a secret: first four characters and the length.
pub fn redact_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}…({} chars)", secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_keeps_prefix_only() {
        assert_eq!(redact_secret("eyJhbGciOiJIUzI1NiJ9"), "eyJh…(20 chars)");
        assert_eq!(redact_secret("ab"), "ab…(2 chars)");
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        init_tracing(false);
        assert!(!init_tracing(true));
    }
}
