//! The root error type

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::catalog::{classify_by_status, Condition};
use crate::cause::Cause;
use crate::codes;
use crate::context::ErrorContext;
use crate::error::Result;
use crate::options::ErrorOptions;
use crate::record::{self, ErrorRecord};
use crate::service::ServiceError;

/// Name recorded on plain [`AppError`] instances
pub const APP_ERROR_NAME: &str = "AppError";

/// Code used when neither defaults nor overrides supply one
pub const DEFAULT_CODE: &str = codes::app::INTERNAL_ERROR;

/// Status used when neither defaults nor overrides supply one
pub const DEFAULT_STATUS: i32 = 500;

/// Message used when a caught value is normalized without an explicit message
pub const FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Structured error shared by every integration module
///
/// Instances are immutable: the `with_*` methods consume the error and
/// return a new one. Cloning is cheap, context and cause are shared.
#[derive(Debug, Clone)]
pub struct AppError {
    name: Cow<'static, str>,
    message: String,
    code: String,
    status: i32,
    is_operational: bool,
    context: ErrorContext,
    cause: Option<Cause>,
}

impl AppError {
    /// Build a plain [`AppError`]
    pub fn new(message: impl Into<String>, options: ErrorOptions) -> Self {
        Self::named(APP_ERROR_NAME, message, options)
    }

    /// Build an error labelled with `name`.
    ///
    /// Missing `code`/`status` fall back to [`DEFAULT_CODE`]/[`DEFAULT_STATUS`];
    /// a missing operational flag means operational.
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        options: ErrorOptions,
    ) -> Self {
        let ErrorOptions {
            code,
            status,
            context,
            cause,
            is_operational,
        } = options;

        Self {
            name: name.into(),
            message: message.into(),
            code: code.unwrap_or_else(|| DEFAULT_CODE.to_string()),
            status: status.unwrap_or(DEFAULT_STATUS),
            is_operational: is_operational.unwrap_or(true),
            context: context.unwrap_or_default(),
            cause,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Catalog condition matching this error's status, if any
    pub fn condition(&self) -> Option<Condition> {
        Condition::from_status(self.status)
    }

    /// Whether the status describes a transient upstream condition.
    ///
    /// Classification only; deciding to retry is up to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status, 429 | 502 | 503 | 504)
    }

    /// Walk the cause chain, nearest first
    pub fn causes(&self) -> impl Iterator<Item = &Cause> {
        std::iter::successors(self.cause.as_ref(), |&cause| {
            cause.as_app_error().and_then(AppError::cause)
        })
    }

    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Merge `extra` over the existing context; `extra` wins on collisions
    pub fn with_context(mut self, extra: &ErrorContext) -> Self {
        self.context = self.context.merge(extra);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Plain structured form of this error
    pub fn to_record(&self) -> ErrorRecord {
        record::record_of(self)
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.to_record().to_json()
    }

    /// Serialize the record to a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`FaultlineError::Serialization`](crate::FaultlineError::Serialization)
    /// if encoding fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Rebuild an error received as a record.
    ///
    /// The record's cause, if any, is kept as plain data.
    pub fn from_record(record: ErrorRecord) -> Self {
        let cause = record.cause.map(|cause| Cause::Value(cause.to_json()));

        Self {
            name: Cow::Owned(record.name),
            message: record.message,
            code: record.code,
            status: record.status,
            is_operational: record.is_operational,
            context: record.context,
            cause,
        }
    }

    /// Decode an error from its JSON record
    ///
    /// # Errors
    ///
    /// Returns [`FaultlineError::Serialization`](crate::FaultlineError::Serialization)
    /// if `json` is not a valid error record.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let record: ErrorRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(record))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.name, self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().and_then(Cause::as_error)
    }
}

impl AsRef<AppError> for AppError {
    fn as_ref(&self) -> &AppError {
        self
    }
}

impl Serialize for AppError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl ServiceError for AppError {
    const NAME: &'static str = APP_ERROR_NAME;

    fn from_app_error(inner: AppError) -> Self {
        inner
    }

    /// Every leaf is an `AppError`
    fn accepts(_name: &str) -> bool {
        true
    }

    fn as_app_error(&self) -> &AppError {
        self
    }

    fn into_app_error(self) -> AppError {
        self
    }
}

crate::impl_condition_catalog! {
    AppError {
        not_found => (codes::app::NOT_FOUND, "Resource not found"),
        access_denied => (codes::app::ACCESS_DENIED, "Access denied"),
        validation => (codes::app::VALIDATION_ERROR, "Validation failed"),
        throttling => (codes::app::THROTTLED, "Request was throttled"),
        timeout => (codes::app::TIMEOUT, "Request timed out"),
        internal => (codes::app::INTERNAL_ERROR, "Internal error"),
    }
    classify = classify_by_status;
}
