//! Structured logging sink for faultline errors
//!
//! The error crates never log. Services that want a canonical log line per
//! failure initialize a profile once and call [`log_app_error!`] where the
//! error is handled.
//!
//! ```
//! use faultline_errors::{AppError, ConditionCatalog, ErrorOptions};
//! use faultline_logging::{init, log_app_error, Profile};
//!
//! init(Profile::Test);
//! let err = AppError::throttling(None, ErrorOptions::new());
//! log_app_error!("fetch_config", err);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, ParseProfileError, Profile, PROFILE_ENV};

#[doc(hidden)]
pub mod __private {
    pub use faultline_core_types::schema;
    pub use faultline_errors::AppError;
    pub use tracing;
}
