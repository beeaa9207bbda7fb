use serde::Serialize;

use crate::models::template::TemplateData;

/// Render-and-send request accepted by the mailer service.
#[derive(Debug, Clone, Serialize)]
pub struct MailRequest {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub template_code: String,
    pub event: String,
    pub variables: TemplateData,
}
