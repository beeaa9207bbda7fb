use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    clients::{
        database::DatabaseClient,
        directory::StaticEmailDirectory,
        health::HealthChecker,
        mailer::{MailerClient, NotificationSender},
    },
    config::Config,
    models::{
        audit::{CreateDispatchLog, DispatchStatus},
        error::OperationError,
        health::HealthStatus,
        request::{EVENT_CHANGE_RETURN_STATUS, EVENT_NEW_RETURN_STATUS, RawRequest, TYPE_CHANGE},
        response::{ApiResponse, OperationResult},
        status::{StaticStatusCatalog, StatusCatalog},
        validation::int_field,
    },
    operation::process_return_notification,
};

pub struct AppState {
    database: Arc<DatabaseClient>,
    catalog: Arc<dyn StatusCatalog>,
    sender: Arc<dyn NotificationSender>,
    health_checker: HealthChecker,
}

pub async fn run_api_server(config: Config) -> Result<(), Error> {
    let database = Arc::new(DatabaseClient::connect(&config.database_url).await?);
    let directory = Arc::new(StaticEmailDirectory::from_config(&config));
    let sender = Arc::new(MailerClient::new(&config, directory)?);

    let state = Arc::new(AppState {
        database,
        catalog: Arc::new(StaticStatusCatalog::default()),
        sender,
        health_checker: HealthChecker::new(config.clone()),
    });

    let app = Router::new()
        .route("/api/v1/notifications/return", post(return_notification))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Returns service started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn return_notification(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RawRequest>,
) -> impl IntoResponse {
    let trace_id = Uuid::new_v4().to_string();

    // Audit rows are written even for rejected payloads, so the ids are read
    // permissively here rather than from the validated request.
    let reseller_id = int_field(&payload, "resellerId").unwrap_or(0);
    let event = match int_field(&payload, "notificationType") {
        Some(TYPE_CHANGE) => EVENT_CHANGE_RETURN_STATUS,
        _ => EVENT_NEW_RETURN_STATUS,
    };

    let outcome = process_return_notification(
        &payload,
        state.database.as_ref(),
        state.catalog.as_ref(),
        state.sender.as_ref(),
    )
    .await;

    match outcome {
        Ok(result) => {
            let targets = [
                ("employee", result.notification_employee_by_email),
                ("client", result.notification_client_by_email),
            ];

            for (target, sent) in targets {
                let status = if sent {
                    DispatchStatus::Sent
                } else {
                    DispatchStatus::Failed
                };
                let log =
                    CreateDispatchLog::new(trace_id.clone(), reseller_id, target, event, status);

                if let Err(e) = state.database.log_dispatch(log).await {
                    warn!(error = %e, "Failed to write dispatch log");
                }
            }

            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    result,
                    "Return notification processed".to_string(),
                )),
            )
        }
        Err(e) => {
            let log =
                CreateDispatchLog::new(trace_id, reseller_id, "operation", event, DispatchStatus::Failed)
                    .with_error(e.to_string());

            if let Err(log_err) = state.database.log_dispatch(log).await {
                warn!(error = %log_err, "Failed to write dispatch log");
            }

            (
                error_status(&e),
                Json(ApiResponse::<OperationResult>::error(
                    e.to_string(),
                    "Return notification rejected".to_string(),
                )),
            )
        }
    }
}

fn error_status(error: &OperationError) -> StatusCode {
    match error.status_code() {
        400 => StatusCode::BAD_REQUEST,
        404 => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all().await;

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
