//! Type definitions shared by the capability traits.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Zone Types ============

/// A hosted zone exactly as the provider reports it.
///
/// Identifiers and names are not normalized here: Route 53 returns ids like
/// `/hostedzone/Z123` and names with a trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderZone {
    /// Provider-assigned identifier, possibly path-prefixed.
    pub id: String,
    /// Fully-qualified zone name, possibly with a trailing dot.
    pub name: String,
}

// ============ Record Types ============

/// One record set, kept as the provider's own JSON representation.
///
/// The value is opaque to everything except the provider implementation
/// that produced it; the only field read elsewhere is `Type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(Value);

impl RecordSet {
    /// Wraps a raw record value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The `Type` field (`A`, `NS`, `SOA`, ...), if present.
    pub fn record_type(&self) -> Option<&str> {
        self.0.get("Type").and_then(Value::as_str)
    }

    /// The `Name` field, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("Name").and_then(Value::as_str)
    }

    /// Borrows the raw value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the wrapper and returns the raw value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RecordSet {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Position to resume a record-set listing from.
///
/// Route 53 pages record sets by (name, type, set identifier) rather than by
/// page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCursor {
    /// Name of the first record set on the next page.
    pub name: String,
    /// Type of the first record set on the next page.
    pub record_type: String,
    /// Set identifier, for weighted/latency/failover record sets.
    pub identifier: Option<String>,
}

// ============ Pagination ============

/// One page of a cursor-paginated listing.
///
/// # Type Parameters
///
/// * `T`: The item type (e.g., [`ProviderZone`], [`RecordSet`]).
/// * `C`: The cursor type; zone listings use an opaque marker string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T, C = String> {
    /// Items in the current page, in provider order.
    pub items: Vec<T>,
    /// Cursor for the next page; `None` when the listing is exhausted.
    pub next_cursor: Option<C>,
}

impl<T, C> PaginatedResponse<T, C> {
    /// Creates a page.
    pub fn new(items: Vec<T>, next_cursor: Option<C>) -> Self {
        Self { items, next_cursor }
    }

    /// Whether there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

// ============ Change Types ============

/// Action applied to one record set in a change batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Create the record set; fails if it already exists.
    Create,
    /// Create the record set or replace the existing one.
    Upsert,
}

impl ChangeAction {
    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Upsert => "UPSERT",
        }
    }
}

impl std::fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a change batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordChange {
    /// What to do with the record set.
    pub action: ChangeAction,
    /// The record set, as stored in a backup.
    pub record_set: RecordSet,
}

/// A group of record changes submitted in one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Changes, applied by the provider in order.
    pub changes: Vec<RecordChange>,
    /// Optional free-form comment attached to the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ChangeBatch {
    /// Builds a batch applying `action` to every record, preserving order.
    pub fn uniform(action: ChangeAction, records: &[RecordSet]) -> Self {
        Self {
            changes: records
                .iter()
                .map(|record_set| RecordChange {
                    action,
                    record_set: record_set.clone(),
                })
                .collect(),
            comment: None,
        }
    }

    /// Attaches a comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Number of changes in the batch.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Provider acknowledgement of a submitted change batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReceipt {
    /// Provider change identifier.
    pub id: String,
    /// Provider change status (`PENDING`, `INSYNC`, ...).
    pub status: String,
}

// ============ Object Store Types ============

/// Outcome of reading an object.
///
/// A missing key is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectFetch {
    /// The object exists; its full body.
    Found(Vec<u8>),
    /// No object at this key.
    NotFound,
}
