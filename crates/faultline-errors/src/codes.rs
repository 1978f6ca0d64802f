//! Stable error code strings
//!
//! Codes are part of the wire contract; never rename an existing constant's
//! value.

/// Base codes used by [`AppError`](crate::AppError) itself
pub mod app {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const ACCESS_DENIED: &str = "ACCESS_DENIED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const THROTTLED: &str = "THROTTLED";
    pub const TIMEOUT: &str = "TIMEOUT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

pub mod database {
    pub const RECORD_NOT_FOUND: &str = "DB_RECORD_NOT_FOUND";
    pub const ACCESS_DENIED: &str = "DB_ACCESS_DENIED";
    pub const CONSTRAINT_VIOLATION: &str = "DB_CONSTRAINT_VIOLATION";
    pub const TOO_MANY_CONNECTIONS: &str = "DB_TOO_MANY_CONNECTIONS";
    pub const QUERY_TIMEOUT: &str = "DB_QUERY_TIMEOUT";
    pub const INTERNAL_ERROR: &str = "DB_INTERNAL_ERROR";
    pub const CONFLICT: &str = "DB_CONFLICT";
}

pub mod api {
    pub const NOT_FOUND: &str = "API_NOT_FOUND";
    pub const ACCESS_DENIED: &str = "API_ACCESS_DENIED";
    pub const BAD_REQUEST: &str = "API_BAD_REQUEST";
    pub const RATE_LIMITED: &str = "API_RATE_LIMITED";
    pub const TIMEOUT: &str = "API_TIMEOUT";
    pub const INTERNAL_ERROR: &str = "API_INTERNAL_ERROR";
    pub const UNAVAILABLE: &str = "API_UNAVAILABLE";
}

pub mod http {
    pub const NOT_FOUND: &str = "HTTP_NOT_FOUND";
    pub const FORBIDDEN: &str = "HTTP_FORBIDDEN";
    pub const BAD_REQUEST: &str = "HTTP_BAD_REQUEST";
    pub const TOO_MANY_REQUESTS: &str = "HTTP_TOO_MANY_REQUESTS";
    pub const GATEWAY_TIMEOUT: &str = "HTTP_GATEWAY_TIMEOUT";
    pub const INTERNAL_ERROR: &str = "HTTP_INTERNAL_ERROR";
    pub const UNAUTHORIZED: &str = "HTTP_UNAUTHORIZED";
    pub const BAD_GATEWAY: &str = "HTTP_BAD_GATEWAY";
}

pub mod data {
    pub const NOT_FOUND: &str = "DATA_NOT_FOUND";
    pub const ACCESS_DENIED: &str = "DATA_ACCESS_DENIED";
    pub const INVALID: &str = "DATA_INVALID";
    pub const THROTTLED: &str = "DATA_THROTTLED";
    pub const TIMEOUT: &str = "DATA_TIMEOUT";
    pub const PROCESSING_ERROR: &str = "DATA_PROCESSING_ERROR";
}

pub mod config {
    pub const MISSING: &str = "CONFIG_MISSING";
    pub const ACCESS_DENIED: &str = "CONFIG_ACCESS_DENIED";
    pub const INVALID: &str = "CONFIG_INVALID";
    pub const THROTTLED: &str = "CONFIG_THROTTLED";
    pub const TIMEOUT: &str = "CONFIG_TIMEOUT";
    pub const INTERNAL_ERROR: &str = "CONFIG_INTERNAL_ERROR";
}
