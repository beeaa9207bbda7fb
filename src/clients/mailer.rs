use std::{sync::Arc, time::Duration};

use anyhow::{Error, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::{
    clients::directory::EmailDirectory,
    config::Config,
    models::{
        entity::Entity, mail::MailRequest, request::ValidatedRequest, retry::RetryConfig,
        template::TemplateData,
    },
    utils::retry_with_backoff,
};

pub const TEMPLATE_EMPLOYEE_RETURN_STATUS: &str = "return_status_employee";
pub const TEMPLATE_CLIENT_RETURN_STATUS: &str = "return_status_client";

/// Delivers the employee and client notifications for one operation.
///
/// Fire-and-report: each send yields a boolean outcome, never an error, so
/// one failing target cannot abort the other.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    async fn send_to_employee(
        &self,
        request: &ValidatedRequest,
        data: &TemplateData,
        reseller: &Entity,
    ) -> bool;

    async fn send_to_client(
        &self,
        request: &ValidatedRequest,
        data: &TemplateData,
        client: &Entity,
    ) -> bool;
}

/// HTTP client for the mailer service, which renders templates and performs
/// the actual delivery.
pub struct MailerClient {
    http_client: Client,
    base_url: String,
    retry_config: RetryConfig,
    directory: Arc<dyn EmailDirectory>,
}

impl MailerClient {
    pub fn new(config: &Config, directory: Arc<dyn EmailDirectory>) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.mailer_service_url, "Mailer client initialized");

        Ok(Self {
            http_client,
            base_url: config.mailer_service_url.clone(),
            retry_config: config.retry_config(),
            directory,
        })
    }

    async fn deliver(&self, mail: MailRequest) -> Result<(), Error> {
        let url = format!("{}/api/v1/send", self.base_url);

        retry_with_backoff(&self.retry_config, || {
            let client = self.http_client.clone();
            let url = url.clone();
            let mail = mail.clone();

            async move {
                let response = client
                    .post(&url)
                    .json(&mail)
                    .send()
                    .await
                    .map_err(|e| e.to_string())?;

                let status = response.status();

                if status.is_success() {
                    Ok(())
                } else {
                    Err(format!("Mailer service returned status {}", status))
                }
            }
        })
        .await
        .map_err(|e| anyhow!("Mail delivery failed: {}", e))
    }
}

#[async_trait]
impl NotificationSender for MailerClient {
    async fn send_to_employee(
        &self,
        request: &ValidatedRequest,
        data: &TemplateData,
        reseller: &Entity,
    ) -> bool {
        let event = request.event_name();
        let recipients = self.directory.emails_by_permit(request.reseller_id, event);

        if recipients.is_empty() {
            warn!(
                reseller_id = request.reseller_id,
                event, "No employee recipients configured, skipping send"
            );
            return false;
        }

        let mail = MailRequest {
            from: self.directory.from_address(),
            to: recipients,
            subject: format!("Return event for reseller {}", reseller.full_name()),
            template_code: TEMPLATE_EMPLOYEE_RETURN_STATUS.to_string(),
            event: event.to_string(),
            variables: data.clone(),
        };

        match self.deliver(mail).await {
            Ok(()) => {
                info!(
                    reseller_id = request.reseller_id,
                    event, "Employee notification sent"
                );
                true
            }
            Err(e) => {
                warn!(
                    error = %e,
                    reseller_id = request.reseller_id,
                    "Employee notification failed"
                );
                false
            }
        }
    }

    async fn send_to_client(
        &self,
        request: &ValidatedRequest,
        data: &TemplateData,
        client: &Entity,
    ) -> bool {
        let event = request.event_name();

        // Entity email first, request email as fallback.
        let Some(recipient) = client.email.clone().or_else(|| request.email.clone()) else {
            warn!(client_id = client.id, "Client has no email address, skipping send");
            return false;
        };

        let mail = MailRequest {
            from: self.directory.from_address(),
            to: vec![recipient],
            subject: "Your return status has been updated".to_string(),
            template_code: TEMPLATE_CLIENT_RETURN_STATUS.to_string(),
            event: event.to_string(),
            variables: data.clone(),
        };

        match self.deliver(mail).await {
            Ok(()) => {
                info!(client_id = client.id, event, "Client notification sent");
                true
            }
            Err(e) => {
                warn!(error = %e, client_id = client.id, "Client notification failed");
                false
            }
        }
    }
}
