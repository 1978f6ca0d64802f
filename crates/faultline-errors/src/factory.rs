//! Shared factory and normalization routine
//!
//! Both functions are total: they never panic and always return exactly one
//! instance of the requested subtype with a code and a status.

use crate::app_error::{AppError, FALLBACK_MESSAGE};
use crate::cause::Cause;
use crate::context::ErrorContext;
use crate::options::ErrorOptions;
use crate::service::ServiceError;

/// Build `S` from catalog `defaults` and caller `overrides`.
///
/// Every field present in `overrides` wins. The operational flag is `true`
/// when neither side sets it.
pub fn make_service_error<S: ServiceError>(
    message: impl Into<String>,
    defaults: ErrorOptions,
    overrides: ErrorOptions,
) -> S {
    let options = overrides.merged_over(defaults);
    let is_operational = options.is_operational.unwrap_or(true);

    S::new(message, options.with_operational(is_operational))
}

/// Convert an arbitrary caught value into `S`.
///
/// A value that is already an `S` (or a descendant `S` accepts) keeps its code, status, operational flag,
/// context and cause; `extra_context` is merged over its context and an
/// explicit `message` replaces its message. If it had no cause, the caught
/// value becomes the cause.
///
/// Anything else (foreign errors, sibling subtypes, plain data, null) becomes a
/// new `S` built from `fallback`, with `caught` as its cause.
pub fn from_dependency_error<S: ServiceError>(
    caught: impl Into<Cause>,
    fallback: ErrorOptions,
    message: Option<&str>,
    extra_context: Option<ErrorContext>,
) -> S {
    let caught = caught.into();

    if let Some(existing) = compatible::<S>(&caught) {
        let mut normalized = existing.clone();
        if let Some(extra) = &extra_context {
            normalized = normalized.with_context(extra);
        }
        if let Some(message) = message {
            normalized = normalized.with_message(message);
        }
        if normalized.cause().is_none() {
            normalized = normalized.with_cause(caught);
        }
        return S::from_app_error(normalized);
    }

    let context = match (&fallback.context, extra_context) {
        (Some(base), Some(extra)) => base.merge(&extra),
        (None, Some(extra)) => extra,
        (base, None) => base.clone().unwrap_or_default(),
    };
    let overrides = ErrorOptions::new()
        .with_context(context)
        .with_cause(caught);

    make_service_error::<S>(message.unwrap_or(FALLBACK_MESSAGE), fallback, overrides)
}

/// Same subtype or a descendant of it. Siblings are treated as foreign.
fn compatible<S: ServiceError>(caught: &Cause) -> Option<&AppError> {
    caught.as_app_error().filter(|err| S::is_instance(err))
}
