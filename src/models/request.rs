use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Wire-level payload of a return-notification request: whatever key/value
/// mapping the transport handed us, before any validation.
pub type RawRequest = HashMap<String, serde_json::Value>;

pub const TYPE_NEW: i64 = 1;
pub const TYPE_CHANGE: i64 = 2;

pub const EVENT_NEW_RETURN_STATUS: &str = "newReturnStatus";
pub const EVENT_CHANGE_RETURN_STATUS: &str = "changeReturnStatus";

/// A before/after status-code pair describing the reported transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub from: i64,
    pub to: i64,
}

/// Canonical typed form of a return-notification request.
///
/// `reseller_id` and `notification_type` are the only required fields; every
/// other field is absent unless the caller supplied a value of the right type.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub reseller_id: i64,
    pub notification_type: i64,
    pub client_id: Option<i64>,
    pub creator_id: Option<i64>,
    pub expert_id: Option<i64>,
    pub complaint_id: Option<i64>,
    pub complaint_number: Option<String>,
    pub consumption_id: Option<i64>,
    pub consumption_number: Option<String>,
    pub agreement_number: Option<String>,
    pub date: Option<String>,
    pub differences: Option<StatusChange>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub additional_info: Option<String>,
}

impl ValidatedRequest {
    /// Event name used when routing the outbound notification. Only type 2 is
    /// a status change; anything else is treated as a new return.
    pub fn event_name(&self) -> &'static str {
        match self.notification_type {
            TYPE_CHANGE => EVENT_CHANGE_RETURN_STATUS,
            _ => EVENT_NEW_RETURN_STATUS,
        }
    }
}
