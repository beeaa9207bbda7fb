use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU32, Ordering},
    },
};

use anyhow::Error;
use async_trait::async_trait;
use returns_service::{
    clients::{database::EntityStore, mailer::NotificationSender},
    models::{
        entity::{Entity, EntityKind},
        request::{RawRequest, ValidatedRequest},
        template::TemplateData,
    },
};
use serde_json::{Value, json};

/// Minimal payload satisfying both required fields, as numeric strings the
/// way form-style transports deliver them.
pub fn base_payload() -> RawRequest {
    let mut data = HashMap::new();
    data.insert("resellerId".to_string(), json!("7"));
    data.insert("notificationType".to_string(), json!("1"));
    data
}

pub fn payload_with(entries: &[(&str, Value)]) -> RawRequest {
    let mut data = base_payload();
    for (key, value) in entries {
        data.insert((*key).to_string(), value.clone());
    }
    data
}

pub fn validated_request(reseller_id: i64, notification_type: i64) -> ValidatedRequest {
    ValidatedRequest {
        reseller_id,
        notification_type,
        client_id: None,
        creator_id: None,
        expert_id: None,
        complaint_id: None,
        complaint_number: None,
        consumption_id: None,
        consumption_number: None,
        agreement_number: None,
        date: None,
        differences: None,
        email: None,
        mobile: None,
        additional_info: None,
    }
}

/// Entity store stub backed by a fixed in-memory record set.
pub struct StubEntityStore {
    records: HashMap<(EntityKind, i64), Entity>,
}

impl StubEntityStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Seeds the default records a minimal request resolves against: the
    /// reseller plus id-0 defaults for the optional client/creator/expert.
    pub fn with_defaults(reseller_id: i64) -> Self {
        Self::new()
            .insert(Entity::new(reseller_id, EntityKind::Seller, "Example Seller"))
            .insert(Entity::new(0, EntityKind::Contractor, "Example Client"))
            .insert(Entity::new(0, EntityKind::Employee, "Example Employee"))
    }

    pub fn insert(mut self, entity: Entity) -> Self {
        self.records.insert((entity.kind, entity.id), entity);
        self
    }
}

#[async_trait]
impl EntityStore for StubEntityStore {
    async fn get_by_id(&self, kind: EntityKind, id: i64) -> Result<Option<Entity>, Error> {
        Ok(self.records.get(&(kind, id)).cloned())
    }
}

/// Sender spy recording call counts and the template data it was handed,
/// reporting scripted outcomes.
pub struct SpyNotificationSender {
    employee_outcome: bool,
    client_outcome: bool,
    pub employee_calls: Arc<AtomicU32>,
    pub client_calls: Arc<AtomicU32>,
    pub captured: Arc<Mutex<Vec<TemplateData>>>,
}

impl SpyNotificationSender {
    pub fn succeeding() -> Self {
        Self::with_outcomes(true, true)
    }

    pub fn with_outcomes(employee: bool, client: bool) -> Self {
        Self {
            employee_outcome: employee,
            client_outcome: client,
            employee_calls: Arc::new(AtomicU32::new(0)),
            client_calls: Arc::new(AtomicU32::new(0)),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn total_calls(&self) -> u32 {
        self.employee_calls.load(Ordering::SeqCst) + self.client_calls.load(Ordering::SeqCst)
    }

    pub fn captured_data(&self) -> Option<TemplateData> {
        self.captured.lock().unwrap().first().cloned()
    }
}

#[async_trait]
impl NotificationSender for SpyNotificationSender {
    async fn send_to_employee(
        &self,
        _request: &ValidatedRequest,
        data: &TemplateData,
        _reseller: &Entity,
    ) -> bool {
        self.employee_calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(data.clone());
        self.employee_outcome
    }

    async fn send_to_client(
        &self,
        _request: &ValidatedRequest,
        _data: &TemplateData,
        _client: &Entity,
    ) -> bool {
        self.client_calls.fetch_add(1, Ordering::SeqCst);
        self.client_outcome
    }
}
