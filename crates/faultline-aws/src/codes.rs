//! Stable AWS error code strings, one module per service

macro_rules! service_codes {
    ($($module:ident => $prefix:literal { $not_found:ident },)*) => {
        $(
            pub mod $module {
                pub const $not_found: &str = concat!($prefix, "_", stringify!($not_found));
                pub const ACCESS_DENIED: &str = concat!($prefix, "_ACCESS_DENIED");
                pub const VALIDATION_ERROR: &str = concat!($prefix, "_VALIDATION_ERROR");
                pub const THROTTLED: &str = concat!($prefix, "_THROTTLED");
                pub const TIMEOUT: &str = concat!($prefix, "_TIMEOUT");
                pub const INTERNAL_ERROR: &str = concat!($prefix, "_INTERNAL_ERROR");
            }
        )*
    };
}

service_codes! {
    aws => "AWS" { RESOURCE_NOT_FOUND },
    s3 => "S3" { OBJECT_NOT_FOUND },
    kms => "KMS" { KEY_NOT_FOUND },
    ssm => "SSM" { PARAMETER_NOT_FOUND },
    kinesis => "KINESIS" { STREAM_NOT_FOUND },
    secrets_manager => "SECRETS_MANAGER" { SECRET_NOT_FOUND },
    dynamodb => "DYNAMODB" { TABLE_NOT_FOUND },
    sqs => "SQS" { QUEUE_NOT_FOUND },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes() {
        assert_eq!(ssm::PARAMETER_NOT_FOUND, "SSM_PARAMETER_NOT_FOUND");
        assert_eq!(kinesis::THROTTLED, "KINESIS_THROTTLED");
        assert_eq!(secrets_manager::SECRET_NOT_FOUND, "SECRETS_MANAGER_SECRET_NOT_FOUND");
        assert_eq!(aws::INTERNAL_ERROR, "AWS_INTERNAL_ERROR");
    }
}
