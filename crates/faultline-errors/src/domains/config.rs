use faultline_core_types::schema::CTX_RESOURCE;

use crate::catalog::ConditionCatalog;
use crate::codes::config as codes;
use crate::context::ErrorContext;
use crate::options::ErrorOptions;
use crate::{classify_by_status, define_service_error, impl_condition_catalog};

define_service_error! {
    /// Errors raised while loading or validating service configuration
    pub struct ConfigError => "ConfigError";
}

impl_condition_catalog! {
    ConfigError {
        not_found => (codes::MISSING, "Configuration value not found"),
        access_denied => (codes::ACCESS_DENIED, "Configuration access denied"),
        validation => (codes::INVALID, "Invalid configuration value"),
        throttling => (codes::THROTTLED, "Configuration source throttled"),
        timeout => (codes::TIMEOUT, "Configuration source timed out"),
        internal => (codes::INTERNAL_ERROR, "Configuration error"),
    }
    classify = classify_by_status;
}

impl ConfigError {
    /// A required key is absent
    pub fn missing(key: &str) -> Self {
        let message = format!("Missing configuration value: {key}");
        Self::not_found(
            Some(message.as_str()),
            ErrorOptions::new().with_context(ErrorContext::new().with(CTX_RESOURCE, key)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_records_key() {
        let err = ConfigError::missing("DATABASE_URL");

        assert_eq!(err.code(), codes::MISSING);
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Missing configuration value: DATABASE_URL");
        assert_eq!(err.context().get(CTX_RESOURCE), Some(&json!("DATABASE_URL")));
    }
}
