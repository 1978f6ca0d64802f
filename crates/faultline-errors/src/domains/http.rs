use super::classify_response;
use crate::catalog::{Condition, ConditionCatalog};
use crate::codes::http as codes;
use crate::factory::make_service_error;
use crate::options::ErrorOptions;
use crate::{define_service_error, impl_condition_catalog};

define_service_error! {
    /// Errors raised by generic HTTP clients
    pub struct HttpError => "HttpError";
}

impl_condition_catalog! {
    HttpError {
        not_found => (codes::NOT_FOUND, "HTTP resource not found"),
        access_denied => (codes::FORBIDDEN, "HTTP request forbidden"),
        validation => (codes::BAD_REQUEST, "HTTP request invalid"),
        throttling => (codes::TOO_MANY_REQUESTS, "HTTP request rate limited"),
        timeout => (codes::GATEWAY_TIMEOUT, "HTTP request timed out"),
        internal => (codes::INTERNAL_ERROR, "HTTP request failed"),
    }
    classify = classify_response;
}

impl HttpError {
    pub fn unauthorized(message: Option<&str>, overrides: ErrorOptions) -> Self {
        make_service_error(
            message.unwrap_or("HTTP request unauthorized"),
            ErrorOptions::with_defaults(codes::UNAUTHORIZED, 401),
            overrides,
        )
    }

    pub fn bad_gateway(message: Option<&str>, overrides: ErrorOptions) -> Self {
        make_service_error(
            message.unwrap_or("Bad gateway"),
            ErrorOptions::with_defaults(codes::BAD_GATEWAY, 502),
            overrides,
        )
    }

    /// Error for a raw response status.
    ///
    /// Statuses without a catalog entry keep the internal code but carry
    /// the given status.
    pub fn from_status(status: i32, message: Option<&str>) -> Self {
        match status {
            401 => Self::unauthorized(message, ErrorOptions::new()),
            502 => Self::bad_gateway(message, ErrorOptions::new()),
            _ => match Condition::from_status(status) {
                Some(condition) => {
                    Self::for_condition(condition, message, ErrorOptions::new().with_status(status))
                }
                None => Self::internal(message, ErrorOptions::new().with_status(status)),
            },
        }
    }
}
