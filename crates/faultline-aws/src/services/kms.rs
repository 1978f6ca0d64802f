use crate::codes::kms as codes;

crate::define_aws_error! {
    /// Errors from KMS
    pub struct KmsError => "KmsError", service = "kms" {
        not_found => (codes::KEY_NOT_FOUND, "KMS key not found"),
        access_denied => (codes::ACCESS_DENIED, "KMS access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid KMS request"),
        throttling => (codes::THROTTLED, "KMS request throttled"),
        timeout => (codes::TIMEOUT, "KMS request timed out"),
        internal => (codes::INTERNAL_ERROR, "KMS internal error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_errors::ConditionCatalog;
    use serde_json::json;

    #[test]
    fn test_invalid_ciphertext_is_validation() {
        let err = KmsError::from_caught(json!({"name": "InvalidCiphertextException"}), None, None);
        assert_eq!(err.code(), codes::VALIDATION_ERROR);
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_kms_internal_is_defect() {
        let err = KmsError::from_caught(json!({"name": "KMSInternalException"}), None, None);
        assert_eq!(err.code(), codes::INTERNAL_ERROR);
        assert!(!err.is_operational());
        assert_eq!(err.message(), "KMS internal error");
    }
}
