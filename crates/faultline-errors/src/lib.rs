//! faultline errors - structurally consistent errors for service integrations
//!
//! Every integration module (object storage, key management, parameter store,
//! streaming, databases, third-party APIs) raises errors of the same shape:
//!
//! - a stable machine-readable `code` and an HTTP-style `status`
//! - free-form [`ErrorContext`] metadata
//! - an operational/defect flag
//! - an optional [`Cause`] pointing at the original failure
//!
//! Leaf error types are declared with [`define_service_error!`] and get a
//! condition catalog (`not_found`, `throttling`, ...) via
//! [`impl_condition_catalog!`]. Arbitrary caught values are folded into a
//! typed error with [`ConditionCatalog::from_caught`] or the lower level
//! [`from_dependency_error`].
//!
//! ```
//! use faultline_errors::{AppError, ConditionCatalog, ErrorOptions, ServiceError};
//!
//! let err = AppError::throttling(None, ErrorOptions::new());
//! assert_eq!(err.status(), 429);
//! assert!(err.is_operational());
//! ```

pub mod app_error;
pub mod catalog;
pub mod cause;
pub mod codes;
pub mod context;
pub mod domains;
pub mod error;
pub mod factory;
pub mod options;
pub mod record;
pub mod service;

pub use app_error::{AppError, APP_ERROR_NAME, DEFAULT_CODE, DEFAULT_STATUS, FALLBACK_MESSAGE};
pub use catalog::{classify_by_status, CatalogEntry, Condition, ConditionCatalog};
pub use cause::Cause;
pub use context::ErrorContext;
pub use domains::{ApiError, ConfigError, DataError, DatabaseError, HttpError};
pub use error::{FaultlineError, Result};
pub use factory::{from_dependency_error, make_service_error};
pub use options::ErrorOptions;
pub use record::{CauseRecord, ErrorRecord, MAX_CAUSE_DEPTH};
pub use service::ServiceError;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
