//! Non-AWS specializations of [`AppError`](crate::AppError)
//!
//! Same contract as the AWS leaves: a fixed name, a condition catalog and a
//! `from_caught` entry point. Some add conditions specific to their domain.

pub mod api;
pub mod config;
pub mod data;
pub mod database;
pub mod http;

pub use api::ApiError;
pub use config::ConfigError;
pub use data::DataError;
pub use database::DatabaseError;
pub use http::HttpError;

use crate::catalog::{classify_by_status, Condition};
use crate::cause::Cause;

/// Attribute plain response data by its `status`/`statusCode` field, then
/// typed errors by their status
pub(crate) fn classify_response(cause: &Cause) -> Option<Condition> {
    let from_value = cause.as_value().and_then(|value| {
        ["status", "statusCode"]
            .iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_i64))
            .and_then(|status| i32::try_from(status).ok())
            .and_then(Condition::from_status)
    });

    from_value.or_else(|| classify_by_status(cause))
}
