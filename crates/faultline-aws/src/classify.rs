//! Attribution of AWS SDK failures to catalog conditions
//!
//! SDK errors arrive as JSON payloads (`{"name": "ThrottlingException",
//! "$metadata": {"httpStatusCode": 400}}`, `{"__type":
//! "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException"}`, XML-derived
//! `{"Error": {"Code": "NoSuchKey"}}`), as bare exception-name strings, or as
//! foreign errors whose message starts with the exception name.

use faultline_errors::{classify_by_status, Cause, Condition};
use serde_json::Value;

const NAME_KEYS: [&str; 5] = ["name", "code", "Code", "__type", "errorType"];

/// Leading `Name` of a `"Name: detail"` message
fn message_head(message: &str) -> &str {
    message.split(':').next().unwrap_or(message).trim()
}

/// AWS exception name carried by a JSON payload, if any.
///
/// Strings may be bare names or `"Name: detail"` messages.
pub fn exception_name(value: &Value) -> Option<&str> {
    match value {
        Value::String(message) => Some(message_head(message)),
        Value::Object(map) => NAME_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .or_else(|| value.pointer("/Error/Code").and_then(Value::as_str)),
        _ => None,
    }
}

/// Map an AWS exception name to its condition.
///
/// Accepts fully qualified `__type` values (`namespace#Name`).
pub fn condition_for_exception(name: &str) -> Option<Condition> {
    let name = name.rsplit('#').next().unwrap_or(name).trim();

    let condition = match name {
        "ResourceNotFoundException"
        | "NotFoundException"
        | "NotFound"
        | "NoSuchKey"
        | "NoSuchBucket"
        | "NoSuchUpload"
        | "ParameterNotFound"
        | "ParameterVersionNotFound"
        | "QueueDoesNotExist"
        | "AWS.SimpleQueueService.NonExistentQueue" => Condition::NotFound,

        "AccessDenied"
        | "AccessDeniedException"
        | "UnauthorizedOperation"
        | "UnrecognizedClientException"
        | "InvalidSignatureException"
        | "SignatureDoesNotMatch"
        | "InvalidAccessKeyId"
        | "ExpiredToken"
        | "ExpiredTokenException"
        | "MissingAuthenticationToken" => Condition::AccessDenied,

        "ValidationException"
        | "ValidationError"
        | "InvalidParameterException"
        | "InvalidParameterValue"
        | "InvalidParameterValueException"
        | "InvalidRequestException"
        | "InvalidRequest"
        | "InvalidArgument"
        | "InvalidKeyUsageException"
        | "InvalidCiphertextException"
        | "SerializationException" => Condition::Validation,

        "ThrottlingException"
        | "Throttling"
        | "ThrottledException"
        | "TooManyRequestsException"
        | "ProvisionedThroughputExceededException"
        | "RequestLimitExceeded"
        | "RequestThrottled"
        | "RequestThrottledException"
        | "LimitExceededException"
        | "SlowDown" => Condition::Throttling,

        "TimeoutError"
        | "TimeoutException"
        | "RequestTimeout"
        | "RequestTimeoutException"
        | "ETIMEDOUT"
        | "ESOCKETTIMEDOUT" => Condition::Timeout,

        "InternalFailure"
        | "InternalError"
        | "InternalServerError"
        | "InternalServerErrorException"
        | "InternalServiceError"
        | "KMSInternalException"
        | "ServiceUnavailable"
        | "ServiceUnavailableException" => Condition::Internal,

        _ => return None,
    };

    Some(condition)
}

fn metadata_status(value: &Value) -> Option<i32> {
    value
        .pointer("/$metadata/httpStatusCode")
        .or_else(|| value.get("statusCode"))
        .and_then(Value::as_i64)
        .and_then(|status| i32::try_from(status).ok())
}

/// Classifier shared by every AWS leaf.
///
/// Exception names win over HTTP status; typed errors of other subtypes are
/// attributed by their status.
pub fn classify_aws(cause: &Cause) -> Option<Condition> {
    match cause {
        Cause::Value(value) => exception_name(value)
            .and_then(condition_for_exception)
            .or_else(|| metadata_status(value).and_then(Condition::from_status)),
        Cause::Foreign(err) => {
            let message = err.to_string();
            condition_for_exception(message_head(&message))
        }
        Cause::App(_) => classify_by_status(cause),
    }
}
