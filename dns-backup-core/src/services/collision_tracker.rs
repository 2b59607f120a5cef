//! Tracking of zone names shared by several zones within one run.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::CoreResult;
use crate::types::SummaryEntry;

/// Occurrence count per zone name, scoped to one backup run.
#[derive(Debug, Default)]
pub struct ZoneNameTracker {
    counts: HashMap<String, usize>,
}

impl ZoneNameTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more occurrence of `name` and returns the new count.
    pub fn observe(&mut self, name: &str) -> usize {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Whether a zone seen with `count` (as returned by [`observe`](Self::observe))
    /// gets a summary entry.
    ///
    /// The first zone of a shared name never gets one; only the second and
    /// later occurrences do.
    #[must_use]
    pub fn needs_summary(count: usize) -> bool {
        count >= 2
    }

    #[cfg(test)]
    fn occurrences(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

/// Merges `entry` into the summary currently stored, if any.
///
/// - nothing stored: `[entry]`
/// - a list: `entry` appended
/// - anything else: `[existing, entry]`
pub fn merge_summary(existing: Option<Value>, entry: &SummaryEntry) -> CoreResult<Value> {
    let current = serde_json::to_value(entry)?;
    let merged = match existing {
        None => vec![current],
        Some(Value::Array(mut items)) => {
            items.push(current);
            items
        }
        Some(other) => vec![other, current],
    };
    Ok(Value::Array(merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(zone_id: &str) -> SummaryEntry {
        SummaryEntry {
            zone_name: "example.com".to_string(),
            zone_id: zone_id.to_string(),
            record_count: 3,
            backup_path: format!("2024-01-01_00:00:00/example.com/{zone_id}/route53_backup.json"),
        }
    }

    #[test]
    fn observe_counts_after_increment() {
        let mut tracker = ZoneNameTracker::new();
        assert_eq!(tracker.observe("example.com"), 1);
        assert_eq!(tracker.observe("other.com"), 1);
        assert_eq!(tracker.observe("example.com"), 2);
        assert_eq!(tracker.occurrences("example.com"), 2);
        assert_eq!(tracker.occurrences("missing.com"), 0);
    }

    #[test]
    fn first_occurrence_never_summarized() {
        assert!(!ZoneNameTracker::needs_summary(1));
        assert!(ZoneNameTracker::needs_summary(2));
        assert!(ZoneNameTracker::needs_summary(5));
    }

    #[test]
    fn merge_into_nothing_starts_list() {
        let merged = merge_summary(None, &entry("Z2")).unwrap();
        assert_eq!(merged.as_array().map(Vec::len), Some(1));
        assert_eq!(merged[0]["zone_id"], "Z2");
    }

    #[test]
    fn merge_appends_to_list() {
        let existing = merge_summary(None, &entry("Z2")).unwrap();
        let merged = merge_summary(Some(existing), &entry("Z3")).unwrap();
        assert_eq!(merged[0]["zone_id"], "Z2");
        assert_eq!(merged[1]["zone_id"], "Z3");
    }

    #[test]
    fn merge_wraps_single_object() {
        let legacy = json!({"zone_name": "example.com", "zone_id": "Z0"});
        let merged = merge_summary(Some(legacy.clone()), &entry("Z2")).unwrap();
        assert_eq!(merged[0], legacy);
        assert_eq!(merged[1]["zone_id"], "Z2");
        assert_eq!(merged.as_array().map(Vec::len), Some(2));
    }
}
