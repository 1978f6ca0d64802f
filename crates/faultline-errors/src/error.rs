use thiserror::Error;

/// Result type alias using FaultlineError
pub type Result<T> = std::result::Result<T, FaultlineError>;

/// Failures of the library's own fallible helpers.
///
/// Constructing, merging and normalizing errors never fails; only the
/// JSON boundary helpers can.
#[derive(Debug, Error)]
pub enum FaultlineError {
    /// Context must be built from a JSON object
    #[error("error context must be a JSON object, found {found}")]
    ContextNotAnObject { found: &'static str },

    /// Record could not be encoded or decoded
    #[error("error record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
