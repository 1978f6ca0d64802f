//! AWS specializations of the faultline error taxonomy
//!
//! One leaf error type per AWS dependency, each with the shared condition
//! catalog and a `from_caught` entry point that recognises AWS exception
//! names (`ThrottlingException`, `ResourceNotFoundException`, ...) in SDK
//! error payloads before falling back to the service's internal error.
//!
//! ```
//! use faultline_aws::SsmError;
//! use faultline_errors::{ConditionCatalog, ErrorOptions};
//! use serde_json::json;
//!
//! let err = SsmError::from_caught(json!({"name": "ParameterNotFound"}), None, None);
//! assert_eq!(err.code(), "SSM_PARAMETER_NOT_FOUND");
//! assert_eq!(err.status(), 404);
//! ```

pub mod classify;
pub mod codes;
pub mod service;
pub mod services;

pub use classify::{classify_aws, condition_for_exception, exception_name};
pub use service::{is_aws_error, is_aws_name, AwsError, AwsService, AWS_ERROR_NAMES};
pub use services::{
    DynamoDbError, KinesisError, KmsError, S3Error, SecretsManagerError, SqsError, SsmError,
};

#[doc(hidden)]
pub mod __private {
    pub use faultline_errors::{define_service_error, impl_condition_catalog};
}
