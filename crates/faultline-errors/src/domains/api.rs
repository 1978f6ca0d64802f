use super::classify_response;
use crate::codes::api as codes;
use crate::factory::make_service_error;
use crate::options::ErrorOptions;
use crate::{define_service_error, impl_condition_catalog};

define_service_error! {
    /// Errors raised by third-party API clients
    pub struct ApiError => "ApiError";
}

impl_condition_catalog! {
    ApiError {
        not_found => (codes::NOT_FOUND, "Third-party resource not found"),
        access_denied => (codes::ACCESS_DENIED, "Third-party API access denied"),
        validation => (codes::BAD_REQUEST, "Third-party API rejected the request"),
        throttling => (codes::RATE_LIMITED, "Third-party API rate limit exceeded"),
        timeout => (codes::TIMEOUT, "Third-party API timed out"),
        internal => (codes::INTERNAL_ERROR, "Third-party API error"),
    }
    classify = classify_response;
}

impl ApiError {
    /// Provider reported itself unavailable (503)
    pub fn unavailable(message: Option<&str>, overrides: ErrorOptions) -> Self {
        make_service_error(
            message.unwrap_or("Third-party API unavailable"),
            ErrorOptions::with_defaults(codes::UNAVAILABLE, 503),
            overrides,
        )
    }
}
