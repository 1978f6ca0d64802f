use faultline_errors::ErrorOptions;

use crate::codes::dynamodb as codes;

/// Code for a failed `ConditionExpression`
pub const CONDITIONAL_CHECK_FAILED: &str = "DYNAMODB_CONDITIONAL_CHECK_FAILED";

crate::define_aws_error! {
    /// Errors from DynamoDB
    pub struct DynamoDbError => "DynamoDbError", service = "dynamodb" {
        not_found => (codes::TABLE_NOT_FOUND, "DynamoDB table not found"),
        access_denied => (codes::ACCESS_DENIED, "DynamoDB access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid DynamoDB request"),
        throttling => (codes::THROTTLED, "DynamoDB request throttled"),
        timeout => (codes::TIMEOUT, "DynamoDB request timed out"),
        internal => (codes::INTERNAL_ERROR, "DynamoDB internal error"),
    }
}

impl DynamoDbError {
    /// A conditional write lost against a concurrent writer
    pub fn conditional_check_failed(message: Option<&str>, overrides: ErrorOptions) -> Self {
        let message = message.unwrap_or("DynamoDB conditional check failed");
        faultline_errors::make_service_error(
            message,
            ErrorOptions::with_defaults(CONDITIONAL_CHECK_FAILED, 409),
            overrides,
        )
    }
}
