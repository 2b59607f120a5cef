//! DNS zone backup core library
//!
//! Business logic for snapshotting hosted zones into object storage and
//! restoring a snapshot into a zone:
//! - Backup Service: zone enumeration, per-zone documents, summaries for
//!   zone names shared by several zones
//! - Restore Service: NS/SOA filtering and batched change submission
//!
//! The DNS provider and the object store are injected through
//! [`ServiceContext`] as trait objects, so the services run unchanged
//! against AWS or against in-memory doubles.

pub mod error;
pub mod layout;
pub mod services;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ErrorKind};
pub use layout::BackupLayout;
pub use services::{BackupService, RestoreService, ServiceContext};
