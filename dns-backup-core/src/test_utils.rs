//! Test helpers
//!
//! In-memory capability mocks and factory helpers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dns_backup_provider::{
    ChangeAction, ChangeBatch, ChangeReceipt, DnsProvider, ObjectFetch, ObjectStore,
    PaginatedResponse, ProviderError, ProviderZone, RecordCursor, RecordSet, Result,
};
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::services::ServiceContext;

pub const TEST_BUCKET: &str = "zone-backups";

/// A record set in the stored Route 53 shape
pub fn record(name: &str, record_type: &str) -> RecordSet {
    RecordSet::new(json!({
        "Name": name,
        "Type": record_type,
        "TTL": 300,
        "ResourceRecords": [{"Value": "192.0.2.10"}]
    }))
}

pub fn provider_zone(id: &str, name: &str) -> ProviderZone {
    ProviderZone {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// (Name, Type, SetIdentifier) identity of a record set
fn record_identity(record: &RecordSet) -> (Option<String>, Option<String>, Option<String>) {
    let value = record.as_value();
    let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
    (field("Name"), field("Type"), field("SetIdentifier"))
}

fn bare_zone_id(id: &str) -> &str {
    id.rsplit_once('/').map_or(id, |(_, bare)| bare)
}

// ===== MockDnsProvider =====

pub struct MockDnsProvider {
    zones: RwLock<Vec<ProviderZone>>,
    /// Records per bare zone id
    records: RwLock<HashMap<String, Vec<RecordSet>>>,
    page_sizes: RwLock<(usize, usize)>,
    zone_list_calls: RwLock<usize>,
    change_calls: RwLock<usize>,
    submitted: RwLock<Vec<(String, ChangeBatch)>>,
    /// Index of the `change_record_sets` call to reject
    fail_on_batch: RwLock<Option<usize>>,
    list_error: RwLock<Option<ProviderError>>,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            records: RwLock::new(HashMap::new()),
            page_sizes: RwLock::new((100, 300)),
            zone_list_calls: RwLock::new(0),
            change_calls: RwLock::new(0),
            submitted: RwLock::new(Vec::new()),
            fail_on_batch: RwLock::new(None),
            list_error: RwLock::new(None),
        }
    }

    pub async fn add_zone(&self, zone: ProviderZone, records: Vec<RecordSet>) {
        self.records
            .write()
            .await
            .insert(bare_zone_id(&zone.id).to_string(), records);
        self.zones.write().await.push(zone);
    }

    pub async fn set_page_sizes(&self, zones: usize, records: usize) {
        *self.page_sizes.write().await = (zones, records);
    }

    pub async fn fail_on_batch(&self, index: Option<usize>) {
        *self.change_calls.write().await = 0;
        *self.fail_on_batch.write().await = index;
    }

    pub async fn set_list_error(&self, err: Option<ProviderError>) {
        *self.list_error.write().await = err;
    }

    pub async fn zone_list_calls(&self) -> usize {
        *self.zone_list_calls.read().await
    }

    /// Accepted batches, with the zone they targeted
    pub async fn submitted_batches(&self) -> Vec<(String, ChangeBatch)> {
        self.submitted.read().await.clone()
    }

    pub async fn zone_records(&self, zone_id: &str) -> Vec<RecordSet> {
        self.records
            .read()
            .await
            .get(zone_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_zones(&self, cursor: Option<&str>) -> Result<PaginatedResponse<ProviderZone>> {
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        *self.zone_list_calls.write().await += 1;

        let page_size = self.page_sizes.read().await.0;
        let start = cursor.and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
        let zones = self.zones.read().await;
        let end = (start + page_size).min(zones.len());
        let next_cursor = (end < zones.len()).then(|| end.to_string());
        Ok(PaginatedResponse::new(zones[start..end].to_vec(), next_cursor))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<PaginatedResponse<RecordSet, RecordCursor>> {
        let records = self.records.read().await;
        let Some(records) = records.get(zone_id) else {
            return Err(ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone_id: zone_id.to_string(),
                raw_message: None,
            });
        };

        let start = cursor.map_or(0, |c| {
            records
                .iter()
                .position(|r| {
                    let (name, record_type, identifier) = record_identity(r);
                    name.as_deref() == Some(c.name.as_str())
                        && record_type.as_deref() == Some(c.record_type.as_str())
                        && identifier == c.identifier
                })
                .unwrap_or(records.len())
        });
        let page_size = self.page_sizes.read().await.1;
        let end = (start + page_size).min(records.len());
        let next_cursor = records.get(end).map(|next| {
            let (name, record_type, identifier) = record_identity(next);
            RecordCursor {
                name: name.unwrap_or_default(),
                record_type: record_type.unwrap_or_default(),
                identifier,
            }
        });
        Ok(PaginatedResponse::new(records[start..end].to_vec(), next_cursor))
    }

    async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeReceipt> {
        let call = {
            let mut calls = self.change_calls.write().await;
            *calls += 1;
            *calls - 1
        };
        if *self.fail_on_batch.read().await == Some(call) {
            return Err(ProviderError::InvalidChangeBatch {
                provider: "mock".to_string(),
                raw_message: format!("batch {call} rejected"),
            });
        }

        let mut all_records = self.records.write().await;
        let Some(records) = all_records.get_mut(zone_id) else {
            return Err(ProviderError::ZoneNotFound {
                provider: "mock".to_string(),
                zone_id: zone_id.to_string(),
                raw_message: None,
            });
        };

        // All or nothing: validate the whole batch before applying it.
        let mut staged = records.clone();
        for change in &batch.changes {
            let identity = record_identity(&change.record_set);
            let existing = staged.iter().position(|r| record_identity(r) == identity);
            match (change.action, existing) {
                (ChangeAction::Create, Some(_)) => {
                    return Err(ProviderError::RecordExists {
                        provider: "mock".to_string(),
                        record_name: identity.0.unwrap_or_default(),
                        raw_code: None,
                        raw_message: None,
                    });
                }
                (ChangeAction::Upsert, Some(pos)) => staged[pos] = change.record_set.clone(),
                (_, None) => staged.push(change.record_set.clone()),
            }
        }
        *records = staged;

        self.submitted
            .write()
            .await
            .push((zone_id.to_string(), batch.clone()));
        Ok(ChangeReceipt {
            id: format!("/change/C{call}"),
            status: "PENDING".to_string(),
        })
    }
}

// ===== MockObjectStore =====

pub struct MockObjectStore {
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
    /// Keys in write order
    puts: RwLock<Vec<String>>,
    get_error: RwLock<Option<ProviderError>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            puts: RwLock::new(Vec::new()),
            get_error: RwLock::new(None),
        }
    }

    /// Seeds an object without recording a put
    pub async fn insert(&self, bucket: &str, key: &str, body: Vec<u8>) {
        self.objects
            .write()
            .await
            .insert((bucket.to_string(), key.to_string()), body);
    }

    pub async fn set_get_error(&self, err: Option<ProviderError>) {
        *self.get_error.write().await = err;
    }

    pub async fn object_bytes(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub async fn object_json(&self, bucket: &str, key: &str) -> Option<Value> {
        let bytes = self.object_bytes(bucket, key).await?;
        serde_json::from_slice(&bytes).ok()
    }

    pub async fn put_keys(&self) -> Vec<String> {
        self.puts.read().await.clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.insert(bucket, key, body).await;
        self.puts.write().await.push(key.to_string());
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectFetch> {
        if let Some(err) = self.get_error.read().await.clone() {
            return Err(err);
        }
        Ok(self
            .object_bytes(bucket, key)
            .await
            .map_or(ObjectFetch::NotFound, ObjectFetch::Found))
    }
}

// ===== Factories =====

/// Creates a `ServiceContext` wired to fresh mocks
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockDnsProvider>, Arc<MockObjectStore>) {
    let dns = Arc::new(MockDnsProvider::new());
    let store = Arc::new(MockObjectStore::new());
    let ctx = Arc::new(ServiceContext::new(dns.clone(), store.clone()));
    (ctx, dns, store)
}
