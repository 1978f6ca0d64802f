//! Diagnostic context attached to errors
//!
//! A context is an open, immutable mapping of string keys to JSON values.
//! Merging is shallow and right-biased and always yields a new mapping, so a
//! context attached to one error can be shared with another without either
//! observing changes made through the other.

use std::collections::BTreeMap;
use std::sync::Arc;

use faultline_core_types::schema::{CTX_REQUEST_ID, CTX_TRACE_ID};
use faultline_core_types::{RequestId, TraceId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{json_type_name, FaultlineError, Result};

/// Request-specific diagnostic data carried by an error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    entries: Arc<BTreeMap<String, Value>>,
}

impl ErrorContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a context with `key` set to `value`.
    ///
    /// Clones the underlying map only if it is shared with another context.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.entries).insert(key.into(), value.into());
        self
    }

    pub fn with_request_id(self, request_id: &RequestId) -> Self {
        self.with(CTX_REQUEST_ID, request_id.as_str())
    }

    pub fn with_trace_id(self, trace_id: &TraceId) -> Self {
        self.with(CTX_TRACE_ID, trace_id.as_str())
    }

    /// Shallow merge where `later` wins on key collisions
    pub fn merge(&self, later: &ErrorContext) -> ErrorContext {
        if later.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return later.clone();
        }

        let mut merged = (*self.entries).clone();
        merged.extend(later.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from(merged)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build a context from a JSON object
    ///
    /// # Errors
    ///
    /// Returns [`FaultlineError::ContextNotAnObject`] for any other JSON value.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(FaultlineError::ContextNotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<BTreeMap<String, Value>> for ErrorContext {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl From<Map<String, Value>> for ErrorContext {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for ErrorContext {
    type Error = FaultlineError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<BTreeMap<_, _>>(),
        )
    }
}

impl Serialize for ErrorContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorContext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::from)
    }
}

/// Build an [`ErrorContext`] from `key => value` pairs
///
/// # Example
///
/// ```
/// use faultline_errors::error_context;
///
/// let ctx = error_context! { "bucket" => "assets", "retryCount" => 2 };
/// assert_eq!(ctx.len(), 2);
/// ```
#[macro_export]
macro_rules! error_context {
    () => {
        $crate::ErrorContext::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::ErrorContext::new()$(.with($key, $value))+
    };
}
