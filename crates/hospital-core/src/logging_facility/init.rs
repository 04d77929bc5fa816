//! Subscriber installation for the `hospital` binary
//!
//! Events go to stderr; stdout is left to command output.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output style selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Pretty text, debug and above
    Development,
    /// One JSON object per event, info and above
    Production,
    /// Bare registry; tests install `init_test_capture` instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "hospital=debug",
            Profile::Production => "hospital=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call has an effect. `RUST_LOG` replaces the profile's
/// default filter when set.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Development);
    }

    #[test]
    fn test_default_filters_target_workspace_crates() {
        assert_eq!(Profile::Development.default_filter(), "hospital=debug");
        assert_eq!(Profile::Production.default_filter(), "hospital=info");
        assert_ne!(Profile::Development, Profile::Production);
    }
}
