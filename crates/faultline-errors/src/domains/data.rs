use crate::catalog::{classify_by_status, Condition};
use crate::cause::Cause;
use crate::codes::data as codes;
use crate::{define_service_error, impl_condition_catalog};

define_service_error! {
    /// Errors raised while decoding, encoding or transforming payloads
    pub struct DataError => "DataError";
}

impl_condition_catalog! {
    DataError {
        not_found => (codes::NOT_FOUND, "Data not found"),
        access_denied => (codes::ACCESS_DENIED, "Data access denied"),
        validation => (codes::INVALID, "Invalid data"),
        throttling => (codes::THROTTLED, "Data pipeline throttled"),
        timeout => (codes::TIMEOUT, "Data processing timed out"),
        internal => (codes::PROCESSING_ERROR, "Data processing failed"),
    }
    classify = classify_data;
}

/// Malformed JSON is a validation problem, not a defect
fn classify_data(cause: &Cause) -> Option<Condition> {
    let is_json_error = cause
        .as_foreign()
        .is_some_and(|err| err.downcast_ref::<serde_json::Error>().is_some());

    if is_json_error {
        Some(Condition::Validation)
    } else {
        classify_by_status(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConditionCatalog;

    #[test]
    fn test_json_errors_are_validation() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = DataError::from_caught(parse_err, None, None);

        assert_eq!(err.code(), codes::INVALID);
        assert_eq!(err.status(), 400);
        assert!(err.is_operational());
        assert!(err.cause().and_then(Cause::as_foreign).is_some());
    }

    #[test]
    fn test_io_errors_are_internal() {
        let err = DataError::from_caught(std::io::Error::other("pipe"), None, None);
        assert_eq!(err.code(), codes::PROCESSING_ERROR);
    }
}
