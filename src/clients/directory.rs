use crate::config::Config;

/// Resolves sender and employee recipient addresses for outbound
/// notifications.
pub trait EmailDirectory: Send + Sync {
    fn from_address(&self) -> String;

    /// Employee addresses permitted to receive the given event for a
    /// reseller.
    fn emails_by_permit(&self, reseller_id: i64, event: &str) -> Vec<String>;
}

/// Configuration-backed directory: one sender address, one employee list
/// shared by every reseller and event.
pub struct StaticEmailDirectory {
    from_address: String,
    employee_emails: Vec<String>,
}

impl StaticEmailDirectory {
    pub fn from_config(config: &Config) -> Self {
        Self {
            from_address: config.notification_from_email.clone(),
            employee_emails: config.employee_notification_emails.clone(),
        }
    }

    pub fn new(from_address: impl Into<String>, employee_emails: Vec<String>) -> Self {
        Self {
            from_address: from_address.into(),
            employee_emails,
        }
    }
}

impl EmailDirectory for StaticEmailDirectory {
    fn from_address(&self) -> String {
        self.from_address.clone()
    }

    fn emails_by_permit(&self, _reseller_id: i64, _event: &str) -> Vec<String> {
        self.employee_emails.clone()
    }
}
