//! Backup document, summary and run report types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dns_backup_provider::RecordSet;

use super::Zone;
use crate::layout::BackupLayout;

/// `zone` section of a backup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneMetadata {
    pub id: String,
    pub name: String,
    /// Present only in the zone-scoped layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_count: Option<usize>,
}

/// One zone's snapshot, written once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub zone: ZoneMetadata,
    /// Record sets in provider order.
    pub records: Vec<RecordSet>,
}

impl BackupDocument {
    /// Builds the document for `zone` in the shape `layout` prescribes.
    #[must_use]
    pub fn new(zone: &Zone, records: Vec<RecordSet>, layout: BackupLayout) -> Self {
        let record_count = layout.includes_record_count().then_some(records.len());
        Self {
            zone: ZoneMetadata {
                id: zone.id.clone(),
                name: zone.name.clone(),
                record_count,
            },
            records,
        }
    }
}

/// Entry of a `zone_summary.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub zone_name: String,
    pub zone_id: String,
    pub record_count: usize,
    pub backup_path: String,
}

/// Input of one backup run.
#[derive(Debug, Clone)]
pub struct BackupRequest {
    /// Destination bucket
    pub bucket: String,
    /// Key layout
    pub layout: BackupLayout,
    /// Run start; every key of the run shares its timestamp
    pub started_at: DateTime<Utc>,
}

impl BackupRequest {
    /// A request starting now.
    #[must_use]
    pub fn new(bucket: impl Into<String>, layout: BackupLayout) -> Self {
        Self {
            bucket: bucket.into(),
            layout,
            started_at: Utc::now(),
        }
    }
}

/// One zone written by a backup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackedUpZone {
    pub zone: Zone,
    pub key: String,
    pub record_count: usize,
}

/// Outcome of a completed backup run.
#[derive(Debug, Clone, Serialize)]
pub struct BackupReport {
    pub bucket: String,
    /// Timestamp label shared by every key of the run
    pub date: String,
    /// Zones in processing order
    pub zones: Vec<BackedUpZone>,
    /// Number of summary document writes
    pub summaries_written: usize,
}

impl BackupReport {
    /// `"<name> (ID: <id>)"` for every zone, in processing order.
    #[must_use]
    pub fn zone_labels(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.zone.label()).collect()
    }
}
