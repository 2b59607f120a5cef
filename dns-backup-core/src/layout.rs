//! Storage key layout for backup and summary documents.
//!
//! | Layout | Backup key | Summary |
//! |--------|------------|---------|
//! | `basic` | `<YYYYMMDD_HHMMSS>/<name>/route53_backup.json` | never |
//! | `zone-scoped` | `<YYYY-MM-DD_HH:MM:SS>/<name>/<id>/route53_backup.json` | `<timestamp>/<name>/zone_summary.json` |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Zone;

const BACKUP_FILE_NAME: &str = "route53_backup.json";
const SUMMARY_FILE_NAME: &str = "zone_summary.json";

/// How backup keys are laid out in the bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackupLayout {
    /// One document per zone name. Zones sharing a name overwrite each other.
    Basic,
    /// One document per zone id, plus a summary for names shared by several zones.
    #[default]
    ZoneScoped,
}

impl BackupLayout {
    /// Timestamp segment shared by every key of a run.
    #[must_use]
    pub fn timestamp_label(self, started_at: &DateTime<Utc>) -> String {
        let format = match self {
            Self::Basic => "%Y%m%d_%H%M%S",
            Self::ZoneScoped => "%Y-%m-%d_%H:%M:%S",
        };
        started_at.format(format).to_string()
    }

    /// Key of the backup document for `zone`.
    #[must_use]
    pub fn backup_key(self, label: &str, zone: &Zone) -> String {
        match self {
            Self::Basic => format!("{label}/{}/{BACKUP_FILE_NAME}", zone.name),
            Self::ZoneScoped => format!("{label}/{}/{}/{BACKUP_FILE_NAME}", zone.name, zone.id),
        }
    }

    /// Key of the summary document for `zone_name`.
    #[must_use]
    pub fn summary_key(label: &str, zone_name: &str) -> String {
        format!("{label}/{zone_name}/{SUMMARY_FILE_NAME}")
    }

    /// Whether repeated zone names are tracked and summarized.
    #[must_use]
    pub fn tracks_collisions(self) -> bool {
        matches!(self, Self::ZoneScoped)
    }

    /// Whether backup documents carry `RecordCount`.
    #[must_use]
    pub fn includes_record_count(self) -> bool {
        matches!(self, Self::ZoneScoped)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::ZoneScoped => "zone-scoped",
        }
    }
}

impl fmt::Display for BackupLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackupLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "zone-scoped" | "zone_scoped" => Ok(Self::ZoneScoped),
            other => Err(format!(
                "unknown backup layout '{other}' (expected 'basic' or 'zone-scoped')"
            )),
        }
    }
}
