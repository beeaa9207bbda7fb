use serde_json::Value;

use crate::models::{
    error::OperationError,
    request::{RawRequest, StatusChange, ValidatedRequest},
};

/// Parses and type-checks a raw payload into a [`ValidatedRequest`].
///
/// `resellerId` and `notificationType` must be present and integer-parseable.
/// Every other scalar field is optional: a value of the wrong type degrades to
/// absent instead of failing the request. `differences` is the exception — if
/// the key exists it must be a map with integer `from`/`to`.
pub fn validate(data: &RawRequest) -> Result<ValidatedRequest, OperationError> {
    let reseller_id = required_int_field(data, "resellerId")?;
    let notification_type = required_int_field(data, "notificationType")?;

    Ok(ValidatedRequest {
        reseller_id,
        notification_type,
        client_id: int_field(data, "clientId"),
        creator_id: int_field(data, "creatorId"),
        expert_id: int_field(data, "expertId"),
        complaint_id: int_field(data, "complaintId"),
        complaint_number: string_field(data, "complaintNumber"),
        consumption_id: int_field(data, "consumptionId"),
        consumption_number: string_field(data, "consumptionNumber"),
        agreement_number: string_field(data, "agreementNumber"),
        date: string_field(data, "date"),
        differences: differences_field(data)?,
        email: string_field(data, "email"),
        mobile: string_field(data, "mobile"),
        additional_info: string_field(data, "additionalInfo"),
    })
}

/// Permissive integer coercion: JSON numbers and numeric strings are accepted,
/// anything else is rejected.
fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn int_field(data: &RawRequest, key: &str) -> Option<i64> {
    data.get(key).and_then(int_value)
}

/// Empty strings count as absent, so a missing value never round-trips into
/// an empty placeholder downstream.
pub fn string_field(data: &RawRequest, key: &str) -> Option<String> {
    match data.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

fn required_int_field(data: &RawRequest, key: &'static str) -> Result<i64, OperationError> {
    let value = data.get(key).ok_or(OperationError::MissingField(key))?;
    int_value(value).ok_or(OperationError::InvalidFormat(key))
}

fn differences_field(data: &RawRequest) -> Result<Option<StatusChange>, OperationError> {
    let Some(value) = data.get("differences") else {
        return Ok(None);
    };

    let Value::Object(fields) = value else {
        return Err(OperationError::InvalidDifferences);
    };

    let from = fields
        .get("from")
        .and_then(int_value)
        .ok_or(OperationError::InvalidDifferences)?;
    let to = fields
        .get("to")
        .and_then(int_value)
        .ok_or(OperationError::InvalidDifferences)?;

    Ok(Some(StatusChange { from, to }))
}
