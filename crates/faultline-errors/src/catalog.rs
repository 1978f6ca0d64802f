//! Named failure conditions and per-subtype condition catalogs
//!
//! Every leaf error type exposes the same six conditions. A leaf supplies
//! only its code table; the constructors, defaults and the `from_caught`
//! normalization entry point are shared default methods.

use serde::{Deserialize, Serialize};

use crate::cause::Cause;
use crate::context::ErrorContext;
use crate::factory::{from_dependency_error, make_service_error};
use crate::options::ErrorOptions;
use crate::service::ServiceError;

/// Canonical failure condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    NotFound,
    AccessDenied,
    Validation,
    Throttling,
    Timeout,
    Internal,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Condition::NotFound,
        Condition::AccessDenied,
        Condition::Validation,
        Condition::Throttling,
        Condition::Timeout,
        Condition::Internal,
    ];

    pub fn default_status(self) -> i32 {
        match self {
            Condition::NotFound => 404,
            Condition::AccessDenied => 403,
            Condition::Validation => 400,
            Condition::Throttling => 429,
            Condition::Timeout => 504,
            Condition::Internal => 500,
        }
    }

    /// Internal errors are defects; everything else is expected
    pub fn is_operational(self) -> bool {
        !matches!(self, Condition::Internal)
    }

    /// Map a status back to its condition
    pub fn from_status(status: i32) -> Option<Self> {
        match status {
            404 => Some(Condition::NotFound),
            401 | 403 => Some(Condition::AccessDenied),
            400 | 422 => Some(Condition::Validation),
            429 => Some(Condition::Throttling),
            408 | 504 => Some(Condition::Timeout),
            500 => Some(Condition::Internal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::NotFound => "not_found",
            Condition::AccessDenied => "access_denied",
            Condition::Validation => "validation",
            Condition::Throttling => "throttling",
            Condition::Timeout => "timeout",
            Condition::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default code and message of one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub message: &'static str,
}

impl CatalogEntry {
    pub const fn new(code: &'static str, message: &'static str) -> Self {
        Self { code, message }
    }
}

/// Attribute a typed error of another subtype by its status
pub fn classify_by_status(cause: &Cause) -> Option<Condition> {
    cause
        .as_app_error()
        .and_then(|err| Condition::from_status(err.status()))
}

/// Condition constructors shared by every leaf error type
///
/// Implement with [`impl_condition_catalog!`](crate::impl_condition_catalog).
pub trait ConditionCatalog: ServiceError {
    /// Code and default message for `condition`
    fn entry(condition: Condition) -> CatalogEntry;

    /// Attribute a foreign caught value to a condition.
    ///
    /// `None` means the value normalizes as an internal error.
    fn classify(_cause: &Cause) -> Option<Condition> {
        None
    }

    /// Catalog defaults for `condition`.
    ///
    /// The operational flag is only pinned for defects; the factory treats
    /// an absent flag as operational.
    fn defaults(condition: Condition) -> ErrorOptions {
        let entry = Self::entry(condition);
        let defaults = ErrorOptions::with_defaults(entry.code, condition.default_status());
        if condition.is_operational() {
            defaults
        } else {
            defaults.with_operational(false)
        }
    }

    fn for_condition(condition: Condition, message: Option<&str>, overrides: ErrorOptions) -> Self {
        let message = message.unwrap_or(Self::entry(condition).message);
        make_service_error::<Self>(message, Self::defaults(condition), overrides)
    }

    fn not_found(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::NotFound, message, overrides)
    }

    fn access_denied(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::AccessDenied, message, overrides)
    }

    fn validation(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::Validation, message, overrides)
    }

    fn throttling(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::Throttling, message, overrides)
    }

    fn timeout(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::Timeout, message, overrides)
    }

    fn internal(message: Option<&str>, overrides: ErrorOptions) -> Self {
        Self::for_condition(Condition::Internal, message, overrides)
    }

    /// Normalize any caught value into this type.
    ///
    /// Values this type can attribute (see [`ConditionCatalog::classify`])
    /// use that condition's defaults and message; everything else falls back
    /// to the internal condition and the generic fallback message. A typed
    /// cause marked as a defect keeps the new error non-operational.
    fn from_caught(
        value: impl Into<Cause>,
        message: Option<&str>,
        context: Option<ErrorContext>,
    ) -> Self {
        let cause = value.into();
        let own = cause.as_app_error().is_some_and(|err| Self::is_instance(err));
        let condition = if own { None } else { Self::classify(&cause) };
        let defect = cause.as_app_error().is_some_and(|err| !err.is_operational());
        match condition {
            Some(condition) => {
                let message = message.or(Some(Self::entry(condition).message));
                let mut defaults = Self::defaults(condition);
                if defect {
                    defaults = defaults.with_operational(false);
                }
                from_dependency_error::<Self>(cause, defaults, message, context)
            }
            None => from_dependency_error::<Self>(
                cause,
                Self::defaults(Condition::Internal),
                message,
                context,
            ),
        }
    }
}

/// Implement [`ConditionCatalog`] from a code table
///
/// # Example
///
/// ```
/// use faultline_errors::{define_service_error, impl_condition_catalog};
/// use faultline_errors::{ConditionCatalog, ErrorOptions};
///
/// define_service_error! {
///     /// Errors raised by the billing provider client
///     pub struct BillingError => "BillingError";
/// }
///
/// impl_condition_catalog! {
///     BillingError {
///         not_found => ("BILLING_NOT_FOUND", "Invoice not found"),
///         access_denied => ("BILLING_ACCESS_DENIED", "Billing access denied"),
///         validation => ("BILLING_INVALID", "Invalid billing request"),
///         throttling => ("BILLING_THROTTLED", "Billing API throttled"),
///         timeout => ("BILLING_TIMEOUT", "Billing API timed out"),
///         internal => ("BILLING_INTERNAL", "Billing provider failure"),
///     }
/// }
///
/// let err = BillingError::not_found(None, ErrorOptions::new());
/// assert_eq!(err.code(), "BILLING_NOT_FOUND");
/// ```
#[macro_export]
macro_rules! impl_condition_catalog {
    (
        $ty:ty {
            not_found => ($nf_code:expr, $nf_msg:expr),
            access_denied => ($ad_code:expr, $ad_msg:expr),
            validation => ($va_code:expr, $va_msg:expr),
            throttling => ($th_code:expr, $th_msg:expr),
            timeout => ($to_code:expr, $to_msg:expr),
            internal => ($in_code:expr, $in_msg:expr) $(,)?
        }
        $(classify = $classify:path;)?
    ) => {
        impl $crate::ConditionCatalog for $ty {
            fn entry(condition: $crate::Condition) -> $crate::CatalogEntry {
                match condition {
                    $crate::Condition::NotFound => $crate::CatalogEntry::new($nf_code, $nf_msg),
                    $crate::Condition::AccessDenied => $crate::CatalogEntry::new($ad_code, $ad_msg),
                    $crate::Condition::Validation => $crate::CatalogEntry::new($va_code, $va_msg),
                    $crate::Condition::Throttling => $crate::CatalogEntry::new($th_code, $th_msg),
                    $crate::Condition::Timeout => $crate::CatalogEntry::new($to_code, $to_msg),
                    $crate::Condition::Internal => $crate::CatalogEntry::new($in_code, $in_msg),
                }
            }

            $(
                fn classify(cause: &$crate::Cause) -> Option<$crate::Condition> {
                    $classify(cause)
                }
            )?
        }
    };
}
