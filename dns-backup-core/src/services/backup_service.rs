//! Backup of every hosted zone into object storage

use std::sync::Arc;

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::layout::BackupLayout;
use crate::services::{ServiceContext, ZoneEnumerator, ZoneNameTracker, merge_summary};
use crate::types::{
    BackedUpZone, BackupDocument, BackupReport, BackupRequest, ObjectFetch, SummaryEntry,
};
use crate::utils::json::to_document_bytes;

/// Backup service
///
/// One run is a single sequential pass: zones are processed in provider
/// order and the first failure aborts the run. Documents already written stay
/// in the bucket.
pub struct BackupService {
    ctx: Arc<ServiceContext>,
    enumerator: ZoneEnumerator,
}

impl BackupService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        let enumerator = ZoneEnumerator::new(Arc::clone(&ctx));
        Self { ctx, enumerator }
    }

    /// Writes one backup document per zone, plus summaries for shared names.
    pub async fn backup(&self, request: &BackupRequest) -> CoreResult<BackupReport> {
        let layout = request.layout;
        let label = layout.timestamp_label(&request.started_at);

        let zones = self.enumerator.list_zones().await?;
        log::info!(
            "Backing up {} hosted zones to bucket {} under {label} ({layout} layout)",
            zones.len(),
            request.bucket
        );

        let mut tracker = ZoneNameTracker::new();
        let mut report = BackupReport {
            bucket: request.bucket.clone(),
            date: label.clone(),
            zones: Vec::with_capacity(zones.len()),
            summaries_written: 0,
        };

        for zone in zones {
            let occurrences = tracker.observe(&zone.name);

            let records = self.enumerator.fetch_records(&zone.id).await?;
            let record_count = records.len();
            let key = layout.backup_key(&label, &zone);
            let document = BackupDocument::new(&zone, records, layout);
            self.ctx
                .object_store
                .put_object(&request.bucket, &key, to_document_bytes(&document)?)
                .await?;

            if layout.tracks_collisions() && ZoneNameTracker::needs_summary(occurrences) {
                let entry = SummaryEntry {
                    zone_name: zone.name.clone(),
                    zone_id: zone.id.clone(),
                    record_count,
                    backup_path: key.clone(),
                };
                self.append_summary(&request.bucket, &label, &entry).await?;
                report.summaries_written += 1;
            }

            log::info!(
                "Backup for hosted zone {} (ID: {}) stored at {key}",
                zone.name,
                zone.id
            );
            report.zones.push(BackedUpZone {
                zone,
                key,
                record_count,
            });
        }

        Ok(report)
    }

    /// Read-modify-write of the summary for `entry.zone_name`.
    ///
    /// Not safe against a concurrent run writing the same summary key.
    async fn append_summary(&self, bucket: &str, label: &str, entry: &SummaryEntry) -> CoreResult<()> {
        let key = BackupLayout::summary_key(label, &entry.zone_name);

        let existing = match self.ctx.object_store.get_object(bucket, &key).await? {
            ObjectFetch::Found(body) => Some(serde_json::from_slice::<Value>(&body).map_err(|e| {
                CoreError::InvalidDocument(format!("summary {key} is not valid JSON: {e}"))
            })?),
            ObjectFetch::NotFound => None,
        };

        let merged = merge_summary(existing, entry)?;
        self.ctx
            .object_store
            .put_object(bucket, &key, to_document_bytes(&merged)?)
            .await?;
        log::debug!(
            "Summary {key} now lists {} zone(s)",
            merged.as_array().map_or(0, Vec::len)
        );
        Ok(())
    }
}
