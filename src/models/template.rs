use chrono::Utc;
use serde::Serialize;

use crate::models::{entity::Entity, request::ValidatedRequest, status::StatusCatalog};

const NOT_AVAILABLE: &str = "N/A";
const NO_CHANGES: &str = "No changes";
const NO_EMAIL: &str = "No email provided";
const UNKNOWN_ROLE: &str = "Unknown role";
const GENERAL_EXPERTISE: &str = "General";
const NO_ADDITIONAL_INFO: &str = "No additional information";

/// Flat set of named values substituted into outbound notification content.
///
/// Serializes under the fixed placeholder names (`CLIENT_NAME`, `DIFFERENCES`,
/// ...) the rendering system expects. Built fresh per operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TemplateData {
    pub client_name: String,
    pub creator_name: String,
    pub expert_name: String,
    pub complaint_number: String,
    pub consumption_number: String,
    pub agreement_number: String,
    pub date: String,
    pub differences: String,
    pub client_email: String,
    pub creator_role: String,
    pub expertise_area: String,
    pub additional_information: String,
}

impl TemplateData {
    /// Combines validated fields and resolved entities into template data.
    ///
    /// Absent strings fall back to `N/A`, except `date` (today, `YYYY-MM-DD`,
    /// UTC). A present status change renders through the catalog; an absent
    /// one renders as the literal `No changes`.
    pub fn build(
        request: &ValidatedRequest,
        client: &Entity,
        creator: &Entity,
        expert: &Entity,
        catalog: &dyn StatusCatalog,
    ) -> Self {
        let differences = match &request.differences {
            Some(change) => format!(
                "Changed from {} to {}",
                catalog.name_of(change.from),
                catalog.name_of(change.to)
            ),
            None => NO_CHANGES.to_string(),
        };

        Self {
            client_name: client.full_name(),
            creator_name: creator.full_name(),
            expert_name: expert.full_name(),
            complaint_number: or_not_available(&request.complaint_number),
            consumption_number: or_not_available(&request.consumption_number),
            agreement_number: or_not_available(&request.agreement_number),
            date: request
                .date
                .clone()
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            differences,
            client_email: client
                .email
                .clone()
                .unwrap_or_else(|| NO_EMAIL.to_string()),
            creator_role: creator
                .role
                .clone()
                .unwrap_or_else(|| UNKNOWN_ROLE.to_string()),
            expertise_area: expert
                .expertise_area
                .clone()
                .unwrap_or_else(|| GENERAL_EXPERTISE.to_string()),
            additional_information: request
                .additional_info
                .clone()
                .unwrap_or_else(|| NO_ADDITIONAL_INFO.to_string()),
        }
    }
}

fn or_not_available(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
