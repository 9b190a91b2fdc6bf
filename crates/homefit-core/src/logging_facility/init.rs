use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, `homefit=debug`
    Development,
    /// JSON lines, `homefit=info`
    Production,
    /// Bare registry; tests install the capture layer instead
    Test,
}

static INIT_ONCE: Once = Once::new();

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. If another subscriber is already set
/// (for example the test capture layer) it is left in place.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter("homefit=debug"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        Profile::Production => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter("homefit=info"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        Profile::Test => {
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}

