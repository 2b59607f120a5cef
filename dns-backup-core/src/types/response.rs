//! Invocation result payload.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{BackupReport, RestoreReport};
use crate::error::CoreError;

/// Operation a result payload reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Backup,
    Restore,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Self::Backup => "Backup",
            Self::Restore => "Restore",
        }
    }
}

/// `{"statusCode": 200|500, "body": {...}}` result of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

impl InvocationResult {
    #[must_use]
    pub fn backup_completed(report: &BackupReport) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "message": "Backup operation completed",
                "backup_bucket": report.bucket,
                "date": report.date,
                "zones_backed_up": report.zone_labels(),
            }),
        }
    }

    #[must_use]
    pub fn restore_completed(report: &RestoreReport) -> Self {
        let message = if report.dry_run {
            "Restore dry run completed"
        } else {
            "Restore operation completed"
        };
        Self {
            status_code: 200,
            body: json!({
                "message": message,
                "restored_zone_id": report.restored_zone_id,
                "backup_key": report.backup_key,
                "records_restored": report.records_restored,
                "records_skipped": report.records_skipped,
                "batches_submitted": report.batches_submitted,
                "batch_sizes": report.batch_sizes,
                "mode": report.mode,
                "dry_run": report.dry_run,
            }),
        }
    }

    #[must_use]
    pub fn failed(operation: Operation, err: &CoreError) -> Self {
        Self {
            status_code: 500,
            body: json!({
                "message": format!("{} operation failed", operation.name()),
                "error": err.to_string(),
                "error_kind": err.kind(),
            }),
        }
    }

    /// Whether the status code is 200.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code == 200
    }
}
