use crate::codes::database as codes;
use crate::factory::make_service_error;
use crate::options::ErrorOptions;
use crate::{classify_by_status, define_service_error, impl_condition_catalog};

define_service_error! {
    /// Errors raised by relational and document database clients
    pub struct DatabaseError => "DatabaseError";
}

impl_condition_catalog! {
    DatabaseError {
        not_found => (codes::RECORD_NOT_FOUND, "Database record not found"),
        access_denied => (codes::ACCESS_DENIED, "Database access denied"),
        validation => (codes::CONSTRAINT_VIOLATION, "Database constraint violated"),
        throttling => (codes::TOO_MANY_CONNECTIONS, "Too many database connections"),
        timeout => (codes::QUERY_TIMEOUT, "Database query timed out"),
        internal => (codes::INTERNAL_ERROR, "Database error"),
    }
    classify = classify_by_status;
}

impl DatabaseError {
    /// Write conflict (unique key, optimistic lock)
    pub fn conflict(message: Option<&str>, overrides: ErrorOptions) -> Self {
        make_service_error(
            message.unwrap_or("Database write conflict"),
            ErrorOptions::with_defaults(codes::CONFLICT, 409),
            overrides,
        )
    }
}
