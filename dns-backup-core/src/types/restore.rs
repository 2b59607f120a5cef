//! Restore request and report types.

use serde::{Deserialize, Serialize};

use dns_backup_provider::ChangeAction;

/// Input of one restore run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreRequest {
    /// Bucket holding the backup
    pub bucket: String,
    /// Key of the backup document
    pub backup_key: String,
    /// Zone receiving the records
    pub hosted_zone_id: String,
    /// `Create` by default; `Upsert` lets an aborted restore be re-run
    pub mode: ChangeAction,
    /// Plan batches without submitting them
    pub dry_run: bool,
}

impl RestoreRequest {
    /// A `CREATE` restore that submits its changes.
    #[must_use]
    pub fn new(
        bucket: impl Into<String>,
        backup_key: impl Into<String>,
        hosted_zone_id: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            backup_key: backup_key.into(),
            hosted_zone_id: hosted_zone_id.into(),
            mode: ChangeAction::Create,
            dry_run: false,
        }
    }
}

/// Restore event payload: `{"backup_key": "...", "hosted_zone_id": "..."}`.
///
/// Both fields are optional here so command-line flags can fill the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RestoreEvent {
    #[serde(default)]
    pub backup_key: Option<String>,
    #[serde(default)]
    pub hosted_zone_id: Option<String>,
}

/// Outcome of a completed restore run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestoreReport {
    pub restored_zone_id: String,
    pub backup_key: String,
    /// Records submitted (or planned, for a dry run)
    pub records_restored: usize,
    /// NS and SOA records left out
    pub records_skipped: usize,
    /// Change batches submitted (or planned)
    pub batches_submitted: usize,
    /// Size of each batch, in submission order
    pub batch_sizes: Vec<usize>,
    pub mode: ChangeAction,
    pub dry_run: bool,
}
