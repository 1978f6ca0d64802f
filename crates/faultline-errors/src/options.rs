use crate::cause::Cause;
use crate::context::ErrorContext;

/// Optional construction parameters for an error.
///
/// Used both for catalog defaults and for caller overrides; every field
/// falls back to the other side when merged.
#[derive(Debug, Clone, Default)]
pub struct ErrorOptions {
    pub code: Option<String>,
    pub status: Option<i32>,
    pub context: Option<ErrorContext>,
    pub cause: Option<Cause>,
    pub is_operational: Option<bool>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only a code/status pair
    pub fn with_defaults(code: impl Into<String>, status: i32) -> Self {
        Self::new().with_code(code).with_status(status)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn with_operational(mut self, is_operational: bool) -> Self {
        self.is_operational = Some(is_operational);
        self
    }

    /// Field-wise merge where `self` wins over `defaults`.
    ///
    /// Context is replaced, not merged: an override context is taken as is.
    pub fn merged_over(self, defaults: ErrorOptions) -> ErrorOptions {
        ErrorOptions {
            code: self.code.or(defaults.code),
            status: self.status.or(defaults.status),
            context: self.context.or(defaults.context),
            cause: self.cause.or(defaults.cause),
            is_operational: self.is_operational.or(defaults.is_operational),
        }
    }
}
