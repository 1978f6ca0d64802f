use faultline_core_types::schema::CTX_RESOURCE;
use faultline_errors::{ConditionCatalog, ErrorContext, ErrorOptions};

use crate::codes::ssm as codes;

crate::define_aws_error! {
    /// Errors from SSM Parameter Store
    pub struct SsmError => "SsmError", service = "ssm" {
        not_found => (codes::PARAMETER_NOT_FOUND, "SSM parameter not found"),
        access_denied => (codes::ACCESS_DENIED, "SSM access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid SSM request"),
        throttling => (codes::THROTTLED, "SSM request throttled"),
        timeout => (codes::TIMEOUT, "SSM request timed out"),
        internal => (codes::INTERNAL_ERROR, "SSM internal error"),
    }
}

impl SsmError {
    /// `name` does not exist in Parameter Store
    pub fn parameter_not_found(name: &str) -> Self {
        Self::not_found(
            None,
            ErrorOptions::new().with_context(ErrorContext::new().with(CTX_RESOURCE, name)),
        )
    }
}
