//! Backup and restore services

mod backup_service;
mod collision_tracker;
mod restore_service;
mod zone_enumerator;

pub use backup_service::BackupService;
pub use collision_tracker::{ZoneNameTracker, merge_summary};
pub use restore_service::{MAX_CHANGES_PER_BATCH, RestoreService, SKIPPED_RECORD_TYPES};
pub use zone_enumerator::ZoneEnumerator;

use std::sync::Arc;

use dns_backup_provider::{DnsProvider, ObjectStore};

/// Service context - holds the injected capabilities
///
/// The binary builds this from the AWS clients; tests inject in-memory mocks.
pub struct ServiceContext {
    /// Zone listing, record listing and change submission
    pub dns_provider: Arc<dyn DnsProvider>,
    /// Backup document storage
    pub object_store: Arc<dyn ObjectStore>,
}

impl ServiceContext {
    /// Create the service context
    #[must_use]
    pub fn new(dns_provider: Arc<dyn DnsProvider>, object_store: Arc<dyn ObjectStore>) -> Self {
        Self {
            dns_provider,
            object_store,
        }
    }
}
