//! Canonical schema constants for error records, context and log events
//!
//! These constants keep the serialized error shape and the logging adapter
//! in agreement about field names.

// Serialized error record keys
pub const RECORD_NAME: &str = "name";
pub const RECORD_MESSAGE: &str = "message";
pub const RECORD_CODE: &str = "code";
pub const RECORD_STATUS: &str = "status";
pub const RECORD_IS_OPERATIONAL: &str = "isOperational";
pub const RECORD_CONTEXT: &str = "context";
pub const RECORD_CAUSE: &str = "cause";
pub const RECORD_TRUNCATED: &str = "truncated";

// Well-known context keys
pub const CTX_REQUEST_ID: &str = "requestId";
pub const CTX_TRACE_ID: &str = "traceId";
pub const CTX_RESOURCE: &str = "resource";
pub const CTX_RETRY_COUNT: &str = "retryCount";

// Log event fields
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_ERR_NAME: &str = "err.name";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_STATUS: &str = "err.status";
pub const FIELD_ERR_OPERATIONAL: &str = "err.operational";

// Canonical event names
pub const EVENT_ERROR: &str = "error";

/// Every key an error record may carry, in serialization order
pub const RECORD_KEYS: [&str; 7] = [
    RECORD_NAME,
    RECORD_MESSAGE,
    RECORD_CODE,
    RECORD_STATUS,
    RECORD_IS_OPERATIONAL,
    RECORD_CONTEXT,
    RECORD_CAUSE,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_keys_are_distinct() {
        let unique: HashSet<_> = RECORD_KEYS.iter().collect();
        assert_eq!(unique.len(), RECORD_KEYS.len());
    }

    #[test]
    fn test_context_keys_do_not_shadow_record_keys() {
        for key in [CTX_REQUEST_ID, CTX_TRACE_ID, CTX_RESOURCE, CTX_RETRY_COUNT] {
            assert!(!RECORD_KEYS.contains(&key), "{key} collides");
        }
    }
}
