//! Restore of one backup document into a hosted zone

use std::sync::Arc;

use serde::Deserialize;

use dns_backup_provider::ProviderError;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{ChangeAction, ChangeBatch, ObjectFetch, RecordSet, RestoreReport, RestoreRequest};

/// Largest number of changes submitted in one request.
pub const MAX_CHANGES_PER_BATCH: usize = 100;

/// Record types owned by the target zone itself, never restored.
pub const SKIPPED_RECORD_TYPES: [&str; 2] = ["NS", "SOA"];

/// The part of a backup document a restore reads. `zone` is ignored.
#[derive(Deserialize)]
struct StoredRecords {
    records: Vec<RecordSet>,
}

/// Restore service
pub struct RestoreService {
    ctx: Arc<ServiceContext>,
}

impl RestoreService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Re-creates the records of a backup document in the target zone.
    ///
    /// Batches are submitted one after another. A rejected batch stops the
    /// restore; batches accepted before it stay applied.
    pub async fn restore(&self, request: &RestoreRequest) -> CoreResult<RestoreReport> {
        let records = self.load_records(&request.bucket, &request.backup_key).await?;
        let total = records.len();
        let restorable = filter_restorable(records)?;
        let skipped = total - restorable.len();

        let batches = plan_batches(&restorable, request.mode);
        let batch_sizes: Vec<usize> = batches.iter().map(ChangeBatch::len).collect();
        log::info!(
            "Restoring {} records ({skipped} NS/SOA skipped) from {} into hosted zone {} in {} batch(es) using {}",
            restorable.len(),
            request.backup_key,
            request.hosted_zone_id,
            batches.len(),
            request.mode
        );

        if request.dry_run {
            log::info!("Dry run: planned batch sizes {batch_sizes:?}, nothing submitted");
        } else {
            self.submit(&request.hosted_zone_id, &batches).await?;
        }

        Ok(RestoreReport {
            restored_zone_id: request.hosted_zone_id.clone(),
            backup_key: request.backup_key.clone(),
            records_restored: restorable.len(),
            records_skipped: skipped,
            batches_submitted: batches.len(),
            batch_sizes,
            mode: request.mode,
            dry_run: request.dry_run,
        })
    }

    async fn load_records(&self, bucket: &str, key: &str) -> CoreResult<Vec<RecordSet>> {
        let body = match self.ctx.object_store.get_object(bucket, key).await? {
            ObjectFetch::Found(body) => body,
            ObjectFetch::NotFound => {
                return Err(ProviderError::ObjectNotFound {
                    provider: self.ctx.object_store.id().to_string(),
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                }
                .into());
            }
        };

        let stored: StoredRecords = serde_json::from_slice(&body).map_err(|e| {
            CoreError::InvalidDocument(format!("{key} is not a backup document: {e}"))
        })?;
        Ok(stored.records)
    }

    async fn submit(&self, zone_id: &str, batches: &[ChangeBatch]) -> CoreResult<()> {
        let mut applied = 0usize;
        for (index, batch) in batches.iter().enumerate() {
            if let Err(err) = self.ctx.dns_provider.change_record_sets(zone_id, batch).await {
                log::warn!(
                    "Batch {}/{} rejected for hosted zone {zone_id}; {applied} records from earlier batches remain applied",
                    index + 1,
                    batches.len()
                );
                return Err(err.into());
            }
            applied += batch.len();
            log::info!(
                "Submitted batch {}/{} ({} changes) to hosted zone {zone_id}",
                index + 1,
                batches.len(),
                batch.len()
            );
        }
        Ok(())
    }
}

/// Drops NS and SOA records, keeping the order of the rest.
///
/// A record without a `Type` makes the whole document invalid.
fn filter_restorable(records: Vec<RecordSet>) -> CoreResult<Vec<RecordSet>> {
    let mut restorable = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let Some(record_type) = record.record_type() else {
            return Err(CoreError::InvalidDocument(format!(
                "record {index} has no Type field"
            )));
        };
        if !SKIPPED_RECORD_TYPES.contains(&record_type) {
            restorable.push(record);
        }
    }
    Ok(restorable)
}

/// Splits records into consecutive batches of at most [`MAX_CHANGES_PER_BATCH`].
fn plan_batches(records: &[RecordSet], action: ChangeAction) -> Vec<ChangeBatch> {
    let total = records.len().div_ceil(MAX_CHANGES_PER_BATCH);
    records
        .chunks(MAX_CHANGES_PER_BATCH)
        .enumerate()
        .map(|(index, chunk)| {
            ChangeBatch::uniform(action, chunk)
                .with_comment(format!("dns-backup restore batch {}/{total}", index + 1))
        })
        .collect()
}
