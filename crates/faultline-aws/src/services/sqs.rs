use crate::codes::sqs as codes;

crate::define_aws_error! {
    /// Errors from SQS
    pub struct SqsError => "SqsError", service = "sqs" {
        not_found => (codes::QUEUE_NOT_FOUND, "SQS queue not found"),
        access_denied => (codes::ACCESS_DENIED, "SQS access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid SQS request"),
        throttling => (codes::THROTTLED, "SQS request throttled"),
        timeout => (codes::TIMEOUT, "SQS request timed out"),
        internal => (codes::INTERNAL_ERROR, "SQS internal error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_errors::ConditionCatalog;
    use serde_json::json;

    #[test]
    fn test_legacy_queue_code() {
        let payload = json!({"Error": {"Code": "AWS.SimpleQueueService.NonExistentQueue"}});
        let err = SqsError::from_caught(payload, None, None);
        assert_eq!(err.code(), codes::QUEUE_NOT_FOUND);
    }
}
