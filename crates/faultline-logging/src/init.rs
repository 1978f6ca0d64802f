//! Logging initialization
//!
//! Provides a single initialization point for the subscriber.

use std::str::FromStr;
use std::sync::Once;

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the profile for [`Profile::from_env`]
pub const PROFILE_ENV: &str = "FAULTLINE_LOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output with debug level
    #[default]
    Development,
    /// JSON structured output with info level
    Production,
    /// Bare registry; tests attach their own capture layer
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown logging profile '{0}' (expected dev, prod or test)")]
pub struct ParseProfileError(pub String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Profile::Development),
            "prod" | "production" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}

impl Profile {
    /// Read the profile from `FAULTLINE_LOG_PROFILE`.
    ///
    /// An unset variable selects [`Profile::Development`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseProfileError`] when the variable holds an unknown name.
    pub fn from_env() -> Result<Self, ParseProfileError> {
        match std::env::var(PROFILE_ENV) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Profile::default()),
        }
    }

    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "faultline=debug",
            Profile::Production | Profile::Test => "faultline=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the global subscriber
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter.
///
/// # Example
///
/// ```
/// use faultline_logging::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
        };

        // A subscriber installed elsewhere (e.g. test capture) wins
        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::fmt().with_env_filter(filter()).try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter())
                    .try_init();
            }
            Profile::Test => {
                let _ = tracing_subscriber::registry().try_init();
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
        init(Profile::Production);
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("dev".parse(), Ok(Profile::Development));
        assert_eq!("Production".parse(), Ok(Profile::Production));
        assert_eq!(" test ".parse(), Ok(Profile::Test));
        assert_eq!(
            "verbose".parse::<Profile>(),
            Err(ParseProfileError("verbose".to_string()))
        );
    }

    #[test]
    fn test_default_profile() {
        assert_eq!(Profile::default(), Profile::Development);
    }
}
