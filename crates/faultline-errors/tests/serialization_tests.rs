use faultline_errors::{
    error_context, AppError, Cause, ConditionCatalog, DatabaseError, ErrorOptions, ErrorRecord,
    FaultlineError, HttpError, ServiceError,
};
use serde_json::json;

#[test]
fn test_record_shape() {
    let err = DatabaseError::not_found(
        None,
        ErrorOptions::new().with_context(error_context! { "table" => "orders" }),
    );

    assert_eq!(
        err.to_json(),
        json!({
            "name": "DatabaseError",
            "message": "Database record not found",
            "code": "DB_RECORD_NOT_FOUND",
            "status": 404,
            "isOperational": true,
            "context": {"table": "orders"},
        })
    );
}

#[test]
fn test_subtype_serializes_like_its_record() {
    let err = DatabaseError::timeout(None, ErrorOptions::new());
    assert_eq!(serde_json::to_value(&err).unwrap(), err.to_json());
}

#[test]
fn test_nested_typed_cause_serializes_recursively() {
    let inner = DatabaseError::timeout(None, ErrorOptions::new().with_cause("socket"));
    let outer = HttpError::from_caught(inner, Some("saving order"), None);

    let json = outer.to_json();
    assert_eq!(json["cause"]["name"], json!("DatabaseError"));
    assert_eq!(json["cause"]["code"], json!("DB_QUERY_TIMEOUT"));
    assert_eq!(json["cause"]["cause"], json!("socket"));
}

#[test]
fn test_json_string_round_trip() {
    let err = AppError::throttling(
        Some("slow down"),
        ErrorOptions::new()
            .with_context(error_context! { "retryCount" => 3 })
            .with_cause(json!({"upstream": "kinesis"})),
    );

    let wire = err.to_json_string().unwrap();
    let back = AppError::from_json_str(&wire).unwrap();

    assert_eq!(back.code(), err.code());
    assert_eq!(back.status(), 429);
    assert_eq!(back.context(), err.context());
    assert_eq!(
        back.cause().and_then(Cause::as_value),
        Some(&json!({"upstream": "kinesis"}))
    );
    assert_eq!(back.to_record(), err.to_record());
}

#[test]
fn test_from_json_str_rejects_garbage() {
    let err = AppError::from_json_str("{\"message\": 1}").unwrap_err();
    assert!(matches!(err, FaultlineError::Serialization(_)));
}

#[test]
fn test_record_without_context_decodes_empty() {
    let record: ErrorRecord = serde_json::from_value(json!({
        "name": "AppError",
        "message": "m",
        "code": "C",
        "status": 500,
        "isOperational": false
    }))
    .unwrap();

    let err = AppError::from_record(record);
    assert!(err.context().is_empty());
    assert!(!err.is_operational());
}

#[test]
fn test_null_cause_survives_json_round_trip() {
    let err = AppError::from_caught((), None, None);

    let wire = err.to_json_string().unwrap();
    assert!(wire.contains(r#""cause":null"#));

    let back = AppError::from_json_str(&wire).unwrap();
    assert_eq!(back.cause().and_then(Cause::as_value), Some(&json!(null)));
    assert_eq!(back.to_record(), err.to_record());
}

#[test]
fn test_missing_cause_key_decodes_as_none() {
    let wire = r#"{"name":"AppError","message":"m","code":"C","status":500,"isOperational":false,"context":{}}"#;
    let back = AppError::from_json_str(wire).unwrap();
    assert!(back.cause().is_none());
}
