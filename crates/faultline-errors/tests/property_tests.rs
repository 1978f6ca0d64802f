use faultline_errors::{
    make_service_error, AppError, Cause, ConditionCatalog, ConfigError, DatabaseError,
    ErrorContext, ErrorOptions, ServiceError,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_options() -> impl Strategy<Value = ErrorOptions> {
    (
        proptest::option::of("[A-Z_]{1,12}"),
        proptest::option::of(-1000i32..1000),
        proptest::option::of(proptest::collection::btree_map("[a-z]{1,4}", 0i64..100, 0..4)),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(code, status, context, is_operational)| ErrorOptions {
            code,
            status,
            context: context.map(|m| m.into_iter().collect::<ErrorContext>()),
            cause: None,
            is_operational,
        })
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,16}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            proptest::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_cause() -> impl Strategy<Value = Cause> {
    prop_oneof![
        arb_json().prop_map(Cause::from),
        ".{0,16}".prop_map(|m| Cause::foreign(std::io::Error::other(m))),
        arb_options().prop_map(|o| Cause::from(DatabaseError::new("db", o))),
        arb_options().prop_map(|o| Cause::from(ConfigError::new("cfg", o))),
        arb_options().prop_map(|o| Cause::from(AppError::new("app", o))),
    ]
}

proptest! {
    #[test]
    fn merge_respects_precedence(defaults in arb_options(), overrides in arb_options()) {
        let err: AppError = make_service_error("m", defaults.clone(), overrides.clone());

        let code = overrides.code.clone().or(defaults.code.clone())
            .unwrap_or_else(|| faultline_errors::DEFAULT_CODE.to_string());
        prop_assert_eq!(err.code(), code.as_str());

        let status = overrides.status.or(defaults.status).unwrap_or(faultline_errors::DEFAULT_STATUS);
        prop_assert_eq!(err.status(), status);

        let is_operational = overrides.is_operational.or(defaults.is_operational).unwrap_or(true);
        prop_assert_eq!(err.is_operational(), is_operational);

        let context = overrides.context.clone().or(defaults.context.clone()).unwrap_or_default();
        prop_assert_eq!(err.context(), &context);
    }

    #[test]
    fn normalization_is_total(cause in arb_cause(), message in proptest::option::of(".{0,8}")) {
        let err = DatabaseError::from_caught(cause.clone(), message.as_deref(), Some(ErrorContext::new().with("k", 1)));

        prop_assert_eq!(err.name(), "DatabaseError");
        prop_assert!(err.context().contains_key("k"));
        if let Some(message) = &message {
            prop_assert_eq!(err.message(), message.as_str());
        }

        let is_compatible = cause.as_app_error().is_some_and(DatabaseError::is_instance);
        if !is_compatible {
            prop_assert!(err.cause().unwrap().is_same(&cause));
        }

        // Serialization never fails or loops.
        let json = err.to_json();
        prop_assert!(json.get("code").is_some());
        prop_assert!(json.get("status").is_some());
    }

    #[test]
    fn normalization_keeps_existing_context_keys(options in arb_options(), extra in proptest::collection::btree_map("[a-z]{1,4}", 0i64..100, 0..4)) {
        let existing = DatabaseError::new("db", options);
        let extra: ErrorContext = extra.into_iter().collect();
        let err = DatabaseError::from_caught(existing.clone(), None, Some(extra.clone()));

        for (key, value) in existing.context().iter() {
            let expected = extra.get(key).unwrap_or(value);
            prop_assert_eq!(err.context().get(key), Some(expected));
        }
        prop_assert_eq!(err.code(), existing.code());
        prop_assert_eq!(err.status(), existing.status());
        prop_assert_eq!(err.message(), existing.message());
    }
}

#[test]
fn test_json_values_round_trip_through_cause() {
    let value = json!({"nested": {"list": [1, "two", null]}});
    let err = AppError::from_caught(value.clone(), None, None);
    assert_eq!(err.to_json()["cause"], value);
}
