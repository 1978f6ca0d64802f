use crate::codes::secrets_manager as codes;

crate::define_aws_error! {
    /// Errors from Secrets Manager
    pub struct SecretsManagerError => "SecretsManagerError", service = "secretsmanager" {
        not_found => (codes::SECRET_NOT_FOUND, "Secret not found"),
        access_denied => (codes::ACCESS_DENIED, "Secrets Manager access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid Secrets Manager request"),
        throttling => (codes::THROTTLED, "Secrets Manager request throttled"),
        timeout => (codes::TIMEOUT, "Secrets Manager request timed out"),
        internal => (codes::INTERNAL_ERROR, "Secrets Manager internal error"),
    }
}
