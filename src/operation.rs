use tracing::info;

use crate::{
    clients::{database::EntityStore, mailer::NotificationSender},
    models::{
        entity::{Entity, EntityKind},
        error::OperationError,
        request::{RawRequest, ValidatedRequest},
        response::OperationResult,
        status::StatusCatalog,
        template::TemplateData,
        validation::validate,
    },
};

/// Runs the full return-notification pipeline: validate the raw payload,
/// resolve the four referenced entities, assemble template data, and dispatch
/// to both notification targets.
///
/// Validation and resolution failures abort the operation before any send is
/// attempted; dispatch outcomes are reported per target and never abort.
pub async fn process_return_notification(
    raw: &RawRequest,
    entities: &dyn EntityStore,
    catalog: &dyn StatusCatalog,
    sender: &dyn NotificationSender,
) -> Result<OperationResult, OperationError> {
    let request = validate(raw)?;

    info!(
        reseller_id = request.reseller_id,
        notification_type = request.notification_type,
        event = request.event_name(),
        "Processing return notification"
    );

    let reseller = resolve_entity(entities, EntityKind::Seller, request.reseller_id).await?;
    let client = resolve_entity(
        entities,
        EntityKind::Contractor,
        request.client_id.unwrap_or(0),
    )
    .await?;
    let creator = resolve_entity(
        entities,
        EntityKind::Employee,
        request.creator_id.unwrap_or(0),
    )
    .await?;
    let expert = resolve_entity(
        entities,
        EntityKind::Employee,
        request.expert_id.unwrap_or(0),
    )
    .await?;

    let template_data = TemplateData::build(&request, &client, &creator, &expert, catalog);

    Ok(send_notifications(&request, &template_data, &reseller, &client, sender).await)
}

/// Fetches one entity, failing fast when the store has no record.
async fn resolve_entity(
    store: &dyn EntityStore,
    kind: EntityKind,
    id: i64,
) -> Result<Entity, OperationError> {
    match store.get_by_id(kind, id).await {
        Ok(Some(entity)) => Ok(entity),
        Ok(None) => Err(OperationError::EntityNotFound { kind, id }),
        Err(e) => Err(OperationError::Store(e)),
    }
}

/// Dispatches to both targets. The sends are independent: both are always
/// attempted concurrently, each recording its own outcome under its own key.
async fn send_notifications(
    request: &ValidatedRequest,
    data: &TemplateData,
    reseller: &Entity,
    client: &Entity,
    sender: &dyn NotificationSender,
) -> OperationResult {
    let (employee_sent, client_sent) = tokio::join!(
        sender.send_to_employee(request, data, reseller),
        sender.send_to_client(request, data, client),
    );

    OperationResult {
        notification_employee_by_email: employee_sent,
        notification_client_by_email: client_sent,
    }
}
