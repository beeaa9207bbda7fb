use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    clients::database::DatabaseClient,
    config::Config,
    models::health::{HealthCheckResponse, HealthStatus, ServiceHealth},
};

pub struct HealthChecker {
    config: Config,
}

impl HealthChecker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let mut checks = HashMap::new();

        let db_health = self.check_database().await;
        checks.insert("database".to_string(), db_health);

        let mailer_health = self.check_mailer_service().await;
        checks.insert("mailer_service".to_string(), mailer_health);

        let overall_status = determine_overall_status(&checks);

        HealthCheckResponse {
            status: overall_status,
            timestamp: Utc::now(),
            checks,
        }
    }

    async fn check_database(&self) -> ServiceHealth {
        let start = Instant::now();

        match DatabaseClient::connect(&self.config.database_url).await {
            Ok(client) => match client.health_check().await {
                Ok(_) => {
                    let elapsed = start.elapsed().as_millis() as u64;
                    debug!(response_time_ms = elapsed, "Database health check passed");
                    ServiceHealth::healthy(elapsed)
                }
                Err(e) => {
                    warn!(error = %e, "Database health check failed");
                    ServiceHealth::unhealthy(format!("Health check query failed: {}", e))
                }
            },
            Err(e) => {
                warn!(error = %e, "Database connection failed");
                ServiceHealth::unhealthy(format!("Connection failed: {}", e))
            }
        }
    }

    async fn check_mailer_service(&self) -> ServiceHealth {
        let start = Instant::now();
        let url = format!("{}/health", self.config.mailer_service_url);

        let request = reqwest::Client::new()
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match request {
            Ok(response) if response.status().is_success() => {
                let elapsed = start.elapsed().as_millis() as u64;
                debug!(response_time_ms = elapsed, "Mailer service health check passed");
                ServiceHealth::healthy(elapsed)
            }
            Ok(response) => {
                warn!(status = %response.status(), "Mailer service reported unhealthy");
                ServiceHealth::unhealthy(format!(
                    "Mailer service returned status {}",
                    response.status()
                ))
            }
            Err(e) => {
                warn!(error = %e, "Mailer service unreachable");
                ServiceHealth::unhealthy(format!("Connection failed: {}", e))
            }
        }
    }
}

fn determine_overall_status(checks: &HashMap<String, ServiceHealth>) -> HealthStatus {
    let has_unhealthy = checks
        .values()
        .any(|health| health.status == HealthStatus::Unhealthy);

    let has_degraded = checks
        .values()
        .any(|health| health.status == HealthStatus::Degraded);

    if has_unhealthy {
        HealthStatus::Unhealthy
    } else if has_degraded {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    }
}
