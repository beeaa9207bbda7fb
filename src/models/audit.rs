use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchStatus {
    Sent,
    Failed,
}

impl Display for DispatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DispatchStatus::Sent => write!(f, "sent"),
            DispatchStatus::Failed => write!(f, "failed"),
        }
    }
}

/// One audit row describing the outcome of a single notification target.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDispatchLog {
    pub trace_id: String,
    pub reseller_id: i64,
    pub target: String,
    pub event: String,
    pub status: DispatchStatus,
    pub error_message: Option<String>,
}

impl CreateDispatchLog {
    pub fn new(
        trace_id: String,
        reseller_id: i64,
        target: impl Into<String>,
        event: impl Into<String>,
        status: DispatchStatus,
    ) -> Self {
        Self {
            trace_id,
            reseller_id,
            target: target.into(),
            event: event.into(),
            status,
            error_message: None,
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error_message = Some(error);
        self
    }
}
