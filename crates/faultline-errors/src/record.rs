//! Plain structured representation of errors
//!
//! The record is the external contract for logging sinks and API bodies:
//! `{ name, message, code, status, isOperational, context, cause? }`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::app_error::AppError;
use crate::cause::Cause;
use crate::context::ErrorContext;

/// Deepest chain of typed causes rendered before truncating
pub const MAX_CAUSE_DEPTH: usize = 16;

/// Label used for foreign error causes
const FOREIGN_NAME: &str = "Error";

/// Serialized form of an [`AppError`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub name: String,
    pub message: String,
    pub code: String,
    pub status: i32,
    pub is_operational: bool,
    #[serde(default)]
    pub context: ErrorContext,
    /// Absent key means no cause; an explicit `null` is a null cause
    #[serde(
        default,
        deserialize_with = "present_cause",
        skip_serializing_if = "Option::is_none"
    )]
    pub cause: Option<CauseRecord>,
}

fn present_cause<'de, D>(deserializer: D) -> Result<Option<CauseRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    CauseRecord::deserialize(deserializer).map(Some)
}

/// Serialized form of a [`Cause`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CauseRecord {
    Error(Box<ErrorRecord>),
    Truncated { truncated: bool },
    Foreign { name: String, message: String },
    Value(Value),
}

impl ErrorRecord {
    pub fn to_json(&self) -> Value {
        // Records only hold strings, integers, bools and JSON values.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl CauseRecord {
    pub fn truncated() -> Self {
        Self::Truncated { truncated: true }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { truncated: true })
    }

    pub fn as_error(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Error(record) => Some(record),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

pub(crate) fn record_of(err: &AppError) -> ErrorRecord {
    let mut path = Vec::new();
    build(err, &mut path)
}

/// `path` holds the typed errors between the root and `err`, inclusive once
/// pushed. A cause already on the path would close a cycle.
fn build<'a>(err: &'a AppError, path: &mut Vec<&'a AppError>) -> ErrorRecord {
    path.push(err);
    let cause = err.cause().map(|cause| cause_record(cause, path));
    path.pop();

    ErrorRecord {
        name: err.name().to_string(),
        message: err.message().to_string(),
        code: err.code().to_string(),
        status: err.status(),
        is_operational: err.is_operational(),
        context: err.context().clone(),
        cause,
    }
}

fn cause_record<'a>(cause: &'a Cause, path: &mut Vec<&'a AppError>) -> CauseRecord {
    match cause {
        Cause::App(inner) => {
            let inner: &AppError = inner;
            let on_path = path.iter().any(|seen| std::ptr::eq(*seen, inner));
            if on_path || path.len() >= MAX_CAUSE_DEPTH {
                CauseRecord::truncated()
            } else {
                CauseRecord::Error(Box::new(build(inner, path)))
            }
        }
        Cause::Foreign(err) => CauseRecord::Foreign {
            name: FOREIGN_NAME.to_string(),
            message: err.to_string(),
        },
        Cause::Value(value) => CauseRecord::Value(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ErrorOptions;
    use faultline_core_types::schema::{RECORD_KEYS, RECORD_TRUNCATED};
    use serde_json::json;

    fn chain(depth: usize) -> AppError {
        (1..depth).fold(AppError::new("e0", ErrorOptions::new()), |inner, i| {
            AppError::new(format!("e{i}"), ErrorOptions::new().with_cause(inner))
        })
    }

    fn typed_depth(record: &ErrorRecord) -> (usize, bool) {
        let mut depth = 1;
        let mut current = record;
        loop {
            match &current.cause {
                Some(CauseRecord::Error(next)) => {
                    depth += 1;
                    current = next;
                }
                Some(cause) => return (depth, cause.is_truncated()),
                None => return (depth, false),
            }
        }
    }

    #[test]
    fn test_record_has_exact_keys() {
        let err = AppError::new("x", ErrorOptions::new().with_cause("raw"));
        let json = err.to_json();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();

        assert_eq!(
            keys,
            vec!["cause", "code", "context", "isOperational", "message", "name", "status"]
        );
    }

    #[test]
    fn test_record_keys_match_schema() {
        let err = AppError::new("x", ErrorOptions::new().with_cause("raw"));
        let json = err.to_json();
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected = RECORD_KEYS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();

        assert_eq!(keys, expected);
    }

    #[test]
    fn test_truncation_marker_key() {
        let marker = CauseRecord::truncated().to_json();
        assert_eq!(marker.get(RECORD_TRUNCATED), Some(&json!(true)));
        assert_eq!(marker.as_object().map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_cause_key_omitted_when_absent() {
        let json = AppError::new("x", ErrorOptions::new()).to_json();
        assert!(json.get("cause").is_none());
    }

    #[test]
    fn test_short_chain_is_fully_rendered() {
        let record = chain(3).to_record();
        assert_eq!(typed_depth(&record), (3, false));
    }

    #[test]
    fn test_deep_chain_is_truncated() {
        let record = chain(MAX_CAUSE_DEPTH + 5).to_record();
        assert_eq!(typed_depth(&record), (MAX_CAUSE_DEPTH, true));
    }

    #[test]
    fn test_foreign_cause_renders_message() {
        let err = AppError::new(
            "x",
            ErrorOptions::new().with_cause(Cause::foreign(std::io::Error::other("socket closed"))),
        );
        assert_eq!(
            err.to_json()["cause"],
            json!({"name": "Error", "message": "socket closed"})
        );
    }

    #[test]
    fn test_record_decodes_back() {
        let err = AppError::new(
            "outer",
            ErrorOptions::with_defaults("X", 409)
                .with_context(crate::error_context! { "a" => 1 })
                .with_cause(AppError::new("inner", ErrorOptions::new())),
        );
        let json = err.to_json();
        let record: ErrorRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record, err.to_record());
        assert!(record.cause.as_ref().unwrap().as_error().is_some());
    }
}
