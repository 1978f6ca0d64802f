//! The AWS branch of the taxonomy
//!
//! Every AWS leaf is a [`ServiceError`] with a condition catalog drawn from
//! [`crate::codes`] and the shared [`classify_aws`](crate::classify_aws)
//! attribution, so `from_caught` understands SDK error payloads.

use faultline_errors::{AppError, ConditionCatalog, ServiceError};

use crate::codes::aws as codes;

/// Marker for leaves that wrap an AWS dependency
pub trait AwsService: ConditionCatalog {
    /// Service identifier, e.g. `"ssm"`
    const SERVICE: &'static str;
}

/// Declare an AWS leaf error type with its condition catalog
///
/// # Example
///
/// ```
/// use faultline_aws::{define_aws_error, AwsService};
/// use faultline_errors::{ConditionCatalog, ErrorOptions};
///
/// define_aws_error! {
///     /// Errors raised by the Step Functions client
///     pub struct SfnError => "SfnError", service = "sfn" {
///         not_found => ("SFN_EXECUTION_NOT_FOUND", "Step Functions execution not found"),
///         access_denied => ("SFN_ACCESS_DENIED", "Step Functions access denied"),
///         validation => ("SFN_VALIDATION_ERROR", "Invalid Step Functions request"),
///         throttling => ("SFN_THROTTLED", "Step Functions request throttled"),
///         timeout => ("SFN_TIMEOUT", "Step Functions request timed out"),
///         internal => ("SFN_INTERNAL_ERROR", "Step Functions internal error"),
///     }
/// }
///
/// let err = SfnError::throttling(None, ErrorOptions::new());
/// assert_eq!(err.status(), 429);
/// assert_eq!(SfnError::SERVICE, "sfn");
/// ```
#[macro_export]
macro_rules! define_aws_error {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident => $label:literal, service = $service:literal {
            $($condition:ident => ($code:expr, $message:expr)),+ $(,)?
        }
        $(accepts = $accepts:path;)?
    ) => {
        $crate::__private::define_service_error! {
            $(#[$meta])*
            $vis struct $name => $label;
            $(accepts = $accepts;)?
        }

        $crate::__private::impl_condition_catalog! {
            $name {
                $($condition => ($code, $message)),+
            }
            classify = $crate::classify_aws;
        }

        impl $crate::AwsService for $name {
            const SERVICE: &'static str = $service;
        }
    };
}

crate::define_aws_error! {
    /// Errors from an AWS dependency without a dedicated leaf
    pub struct AwsError => "AwsError", service = "aws" {
        not_found => (codes::RESOURCE_NOT_FOUND, "AWS resource not found"),
        access_denied => (codes::ACCESS_DENIED, "AWS access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid AWS request"),
        throttling => (codes::THROTTLED, "AWS request throttled"),
        timeout => (codes::TIMEOUT, "AWS request timed out"),
        internal => (codes::INTERNAL_ERROR, "AWS internal error"),
    }
    accepts = is_aws_name;
}

/// Names of every AWS leaf shipped by this crate
pub const AWS_ERROR_NAMES: [&str; 8] = [
    <AwsError as ServiceError>::NAME,
    <crate::S3Error as ServiceError>::NAME,
    <crate::KmsError as ServiceError>::NAME,
    <crate::SsmError as ServiceError>::NAME,
    <crate::KinesisError as ServiceError>::NAME,
    <crate::SecretsManagerError as ServiceError>::NAME,
    <crate::DynamoDbError as ServiceError>::NAME,
    <crate::SqsError as ServiceError>::NAME,
];

/// Whether `name` labels one of the AWS leaves
pub fn is_aws_name(name: &str) -> bool {
    AWS_ERROR_NAMES.contains(&name)
}

/// Whether `err` was produced by one of the AWS leaves
pub fn is_aws_error(err: &AppError) -> bool {
    is_aws_name(err.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultline_errors::{Condition, ErrorOptions};

    #[test]
    fn test_generic_aws_catalog() {
        let err = AwsError::not_found(None, ErrorOptions::new());

        assert_eq!(err.name(), "AwsError");
        assert_eq!(err.code(), "AWS_RESOURCE_NOT_FOUND");
        assert_eq!(err.status(), 404);
        assert!(err.is_operational());
    }

    #[test]
    fn test_is_aws_error() {
        let aws = AwsError::internal(None, ErrorOptions::new());
        assert!(is_aws_error(&aws));
        assert!(!aws.is_operational());

        let base = AppError::new("plain", ErrorOptions::new());
        assert!(!is_aws_error(&base));
    }

    #[test]
    fn test_generic_aws_error_accepts_every_leaf() {
        for name in AWS_ERROR_NAMES {
            assert!(AwsError::accepts(name), "{name}");
        }
        assert!(!AwsError::accepts("DatabaseError"));
        assert!(!crate::SsmError::accepts("AwsError"));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = AWS_ERROR_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AWS_ERROR_NAMES.len());
    }

    #[test]
    fn test_entry_per_condition() {
        for condition in Condition::ALL {
            assert!(AwsError::entry(condition).code.starts_with("AWS_"));
        }
    }
}
