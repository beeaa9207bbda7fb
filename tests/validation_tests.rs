use returns_service::models::{
    error::OperationError,
    request::StatusChange,
    validation::validate,
};
use serde_json::json;

use crate::support::{base_payload, payload_with};

/// Test: A payload without resellerId is rejected as a missing field
#[test]
fn test_missing_reseller_id_fails_with_missing_field() {
    let mut payload = base_payload();
    payload.remove("resellerId");

    let result = validate(&payload);

    match result {
        Err(OperationError::MissingField(field)) => {
            assert_eq!(field, "resellerId");
        }
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

/// Test: A payload without notificationType is rejected as a missing field
#[test]
fn test_missing_notification_type_fails_with_missing_field() {
    let mut payload = base_payload();
    payload.remove("notificationType");

    let result = validate(&payload);

    match result {
        Err(OperationError::MissingField(field)) => {
            assert_eq!(field, "notificationType");
        }
        other => panic!("Expected MissingField, got: {:?}", other),
    }
}

/// Test: Missing-field and invalid-format rejections both carry code 400
#[test]
fn test_client_input_errors_carry_code_400() {
    let mut missing = base_payload();
    missing.remove("resellerId");
    let missing_err = validate(&missing).unwrap_err();
    assert_eq!(missing_err.status_code(), 400);

    let invalid = payload_with(&[("resellerId", json!("not-a-number"))]);
    let invalid_err = validate(&invalid).unwrap_err();
    assert_eq!(invalid_err.status_code(), 400);
}

/// Test: Non-numeric required fields are rejected as invalid format
#[test]
fn test_non_numeric_required_fields_fail_with_invalid_format() {
    let payload = payload_with(&[("resellerId", json!("abc"))]);
    assert!(
        matches!(
            validate(&payload),
            Err(OperationError::InvalidFormat("resellerId"))
        ),
        "Non-numeric resellerId should be InvalidFormat"
    );

    let payload = payload_with(&[("notificationType", json!(true))]);
    assert!(
        matches!(
            validate(&payload),
            Err(OperationError::InvalidFormat("notificationType"))
        ),
        "Boolean notificationType should be InvalidFormat"
    );
}

/// Test: Required integers accept both native numbers and numeric strings
#[test]
fn test_required_integers_accept_permissive_coercion() {
    let as_strings = payload_with(&[("resellerId", json!("7")), ("notificationType", json!("1"))]);
    let request = validate(&as_strings).unwrap();
    assert_eq!(request.reseller_id, 7);
    assert_eq!(request.notification_type, 1);

    let as_numbers = payload_with(&[("resellerId", json!(7)), ("notificationType", json!(2))]);
    let request = validate(&as_numbers).unwrap();
    assert_eq!(request.reseller_id, 7);
    assert_eq!(request.notification_type, 2);
}

/// Test: Mistyped optional fields degrade to absent instead of failing
#[test]
fn test_mistyped_optional_fields_degrade_to_absent() {
    let payload = payload_with(&[
        ("clientId", json!([42])),
        ("complaintNumber", json!({"value": "C-1"})),
        ("email", json!(false)),
    ]);

    let request = validate(&payload).expect("Optional garbage must not fail validation");

    assert_eq!(request.client_id, None);
    assert_eq!(request.complaint_number, None);
    assert_eq!(request.email, None);
}

/// Test: Empty optional strings are treated as absent
#[test]
fn test_empty_optional_strings_treated_as_absent() {
    let payload = payload_with(&[("agreementNumber", json!("")), ("date", json!(""))]);

    let request = validate(&payload).unwrap();

    assert_eq!(request.agreement_number, None);
    assert_eq!(request.date, None);
}

/// Test: A non-map differences value is rejected
#[test]
fn test_differences_non_map_fails() {
    let payload = payload_with(&[("differences", json!("1 to 2"))]);

    assert!(matches!(
        validate(&payload),
        Err(OperationError::InvalidDifferences)
    ));
}

/// Test: differences missing either sub-field is rejected
#[test]
fn test_differences_missing_subfield_fails() {
    let payload = payload_with(&[("differences", json!({"from": 1}))]);
    assert!(matches!(
        validate(&payload),
        Err(OperationError::InvalidDifferences)
    ));

    let payload = payload_with(&[("differences", json!({"to": 2}))]);
    assert!(matches!(
        validate(&payload),
        Err(OperationError::InvalidDifferences)
    ));
}

/// Test: Non-numeric differences sub-fields are rejected
#[test]
fn test_differences_non_numeric_subfield_fails() {
    let payload = payload_with(&[("differences", json!({"from": "pending", "to": 2}))]);

    let error = validate(&payload).unwrap_err();

    assert!(matches!(error, OperationError::InvalidDifferences));
    assert_eq!(error.status_code(), 400);
}

/// Test: An entirely absent differences key validates to None
#[test]
fn test_absent_differences_validates_to_none() {
    let request = validate(&base_payload()).unwrap();

    assert_eq!(request.differences, None);
}

/// Test: differences sub-fields accept numeric strings
#[test]
fn test_differences_accepts_numeric_strings() {
    let payload = payload_with(&[("differences", json!({"from": "1", "to": "2"}))]);

    let request = validate(&payload).unwrap();

    assert_eq!(request.differences, Some(StatusChange { from: 1, to: 2 }));
}

/// Test: A fully-populated payload validates every field
#[test]
fn test_full_payload_validates_every_field() {
    let payload = payload_with(&[
        ("clientId", json!(42)),
        ("creatorId", json!("11")),
        ("expertId", json!(12)),
        ("complaintId", json!(100)),
        ("complaintNumber", json!("C-100")),
        ("consumptionId", json!(200)),
        ("consumptionNumber", json!("K-200")),
        ("agreementNumber", json!("A-300")),
        ("date", json!("2026-08-01")),
        ("differences", json!({"from": 1, "to": 2})),
        ("email", json!("client@example.com")),
        ("mobile", json!("+15550100")),
        ("additionalInfo", json!("Handle with care")),
    ]);

    let request = validate(&payload).unwrap();

    assert_eq!(request.client_id, Some(42));
    assert_eq!(request.creator_id, Some(11));
    assert_eq!(request.expert_id, Some(12));
    assert_eq!(request.complaint_id, Some(100));
    assert_eq!(request.complaint_number.as_deref(), Some("C-100"));
    assert_eq!(request.consumption_id, Some(200));
    assert_eq!(request.consumption_number.as_deref(), Some("K-200"));
    assert_eq!(request.agreement_number.as_deref(), Some("A-300"));
    assert_eq!(request.date.as_deref(), Some("2026-08-01"));
    assert_eq!(request.differences, Some(StatusChange { from: 1, to: 2 }));
    assert_eq!(request.email.as_deref(), Some("client@example.com"));
    assert_eq!(request.mobile.as_deref(), Some("+15550100"));
    assert_eq!(request.additional_info.as_deref(), Some("Handle with care"));
}
