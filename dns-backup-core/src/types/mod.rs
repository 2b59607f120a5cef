//! Type definitions

mod backup;
mod response;
mod restore;
mod zone;

pub use backup::{
    BackedUpZone, BackupDocument, BackupReport, BackupRequest, SummaryEntry, ZoneMetadata,
};
pub use response::{InvocationResult, Operation};
pub use restore::{RestoreEvent, RestoreReport, RestoreRequest};
pub use zone::Zone;

// Re-export provider library types used in the public API
pub use dns_backup_provider::{ChangeAction, ChangeBatch, ObjectFetch, RecordSet};
