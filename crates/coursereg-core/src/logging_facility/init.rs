//! Logging initialization module

use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Build the filter for the given verbosity
///
/// A `RUST_LOG` directive, when set, takes precedence over `level`.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("coursereg={}", level.to_ascii_lowercase())))
}

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops. Logs go to stderr so the
/// interactive shell keeps stdout for its own output.
///
/// # Example
///
/// ```
/// use coursereg_core::logging_facility::{init, Profile};
///
/// init(Profile::Production, "warn");
/// ```
pub fn init(profile: Profile, level: &str) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_for(level))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter_for(level))
                .init();
        }
        Profile::Test => {
            // Capture is installed separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test, "debug");
        init(Profile::Test, "debug");
        init(Profile::Development, "info");
    }

    #[test]
    fn test_profile_default_is_development() {
        assert_eq!(Profile::default(), Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_filter_for_accepts_mixed_case_level() {
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(filter_for("DEBUG").to_string(), "coursereg=debug");
        }
    }
}
