use faultline_aws::{
    AwsService, DynamoDbError, KinesisError, KmsError, S3Error, SecretsManagerError, SqsError,
    SsmError, AWS_ERROR_NAMES,
};
use faultline_errors::{Condition, ConditionCatalog, ErrorOptions, ServiceError};
use proptest::prelude::*;
use serde_json::json;

fn assert_catalog<S: AwsService>(prefix: &str) {
    for condition in Condition::ALL {
        let err = S::for_condition(condition, None, ErrorOptions::new());
        let base = err.as_app_error();

        assert!(base.code().starts_with(prefix), "{} {}", S::NAME, base.code());
        assert_eq!(base.status(), condition.default_status());
        assert_eq!(base.is_operational(), condition.is_operational());
        assert_eq!(base.name(), S::NAME);
        assert_eq!(base.message(), S::entry(condition).message);
    }
}

#[test]
fn test_every_leaf_has_a_complete_catalog() {
    assert_catalog::<S3Error>("S3_");
    assert_catalog::<KmsError>("KMS_");
    assert_catalog::<SsmError>("SSM_");
    assert_catalog::<KinesisError>("KINESIS_");
    assert_catalog::<SecretsManagerError>("SECRETS_MANAGER_");
    assert_catalog::<DynamoDbError>("DYNAMODB_");
    assert_catalog::<SqsError>("SQS_");
}

#[test]
fn test_services_are_named() {
    assert_eq!(SsmError::SERVICE, "ssm");
    assert_eq!(SecretsManagerError::SERVICE, "secretsmanager");
    assert!(AWS_ERROR_NAMES.contains(&SqsError::NAME));
}

#[test]
fn test_overrides_win_over_catalog_defaults() {
    let err = KinesisError::timeout(
        Some("put_records timed out"),
        ErrorOptions::new().with_status(408).with_operational(false),
    );

    assert_eq!(err.code(), "KINESIS_TIMEOUT");
    assert_eq!(err.status(), 408);
    assert!(!err.is_operational());
    assert_eq!(err.message(), "put_records timed out");
}

#[test]
fn test_record_shape() {
    let err = SsmError::not_found(None, ErrorOptions::new());
    assert_eq!(
        err.to_json(),
        json!({
            "name": "SsmError",
            "message": "SSM parameter not found",
            "code": "SSM_PARAMETER_NOT_FOUND",
            "status": 404,
            "isOperational": true,
            "context": {}
        })
    );
}

proptest! {
    #[test]
    fn from_caught_is_total_for_any_payload(name in ".{0,40}", status in proptest::option::of(-1000i32..1000)) {
        let mut payload = json!({ "name": name });
        if let Some(status) = status {
            payload["$metadata"] = json!({ "httpStatusCode": status });
        }
        let err = SsmError::from_caught(payload, None, None);

        prop_assert!(err.code().starts_with("SSM_"));
        prop_assert_eq!(err.name(), "SsmError");
        prop_assert!(err.cause().is_some());
    }
}
