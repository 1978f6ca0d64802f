use faultline_core_types::schema::CTX_RESOURCE;
use faultline_errors::{ConditionCatalog, ErrorContext, ErrorOptions};

use crate::codes::s3 as codes;

crate::define_aws_error! {
    /// Errors from S3
    pub struct S3Error => "S3Error", service = "s3" {
        not_found => (codes::OBJECT_NOT_FOUND, "S3 object not found"),
        access_denied => (codes::ACCESS_DENIED, "S3 access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid S3 request"),
        throttling => (codes::THROTTLED, "S3 request throttled"),
        timeout => (codes::TIMEOUT, "S3 request timed out"),
        internal => (codes::INTERNAL_ERROR, "S3 internal error"),
    }
}

impl S3Error {
    pub fn object_not_found(bucket: &str, key: &str) -> Self {
        let context = ErrorContext::new()
            .with("bucket", bucket)
            .with(CTX_RESOURCE, key);
        Self::not_found(None, ErrorOptions::new().with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_such_key_payload() {
        let err = S3Error::from_caught(json!({"Code": "NoSuchKey", "Key": "a.txt"}), None, None);

        assert_eq!(err.code(), codes::OBJECT_NOT_FOUND);
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_slow_down_is_throttling() {
        let err = S3Error::from_caught("SlowDown", None, None);
        assert_eq!(err.code(), codes::THROTTLED);
        assert_eq!(err.status(), 429);
    }

    #[test]
    fn test_object_not_found_context() {
        let err = S3Error::object_not_found("reports", "2024/q1.csv");
        assert_eq!(err.context().get("bucket"), Some(&json!("reports")));
        assert_eq!(err.context().get(CTX_RESOURCE), Some(&json!("2024/q1.csv")));
    }
}
