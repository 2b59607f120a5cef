//! # dns-backup-provider
//!
//! Capability traits for the two external services a zone backup talks to,
//! plus their AWS implementations.
//!
//! ## Capabilities
//!
//! | Trait | Implementation | Service |
//! |-------|----------------|---------|
//! | [`DnsProvider`] | [`Route53Provider`] | Amazon Route 53 |
//! | [`ObjectStore`] | [`S3ObjectStore`] | Amazon S3 |
//!
//! Both traits are object safe and are meant to be passed around as
//! `Arc<dyn DnsProvider>` / `Arc<dyn ObjectStore>`, so callers can swap in
//! in-memory fakes for tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_backup_provider::{create_object_store, create_provider, load_aws_config, ObjectFetch};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_aws_config(None).await;
//!     let provider = create_provider(&config);
//!     let store = create_object_store(&config);
//!
//!     let zones = provider.list_zones(None).await?;
//!     for zone in &zones.items {
//!         println!("{} ({})", zone.name, zone.id);
//!     }
//!
//!     match store.get_object("my-bucket", "some/key.json").await? {
//!         ObjectFetch::Found(body) => println!("{} bytes", body.len()),
//!         ObjectFetch::NotFound => println!("missing"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). AWS SDK
//! failures are mapped into structured variants such as
//! [`ProviderError::InvalidChangeBatch`] or [`ProviderError::RateLimited`];
//! codes that have no dedicated variant end up in [`ProviderError::Unknown`]
//! with the raw code preserved. Nothing is retried at this layer.
//!
//! A missing object is not an error: [`ObjectStore::get_object`] returns
//! [`ObjectFetch::NotFound`].

mod error;
mod factory;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_object_store, create_provider, load_aws_config};

// Re-export capability traits (internal traits are not exported)
pub use traits::{DnsProvider, ObjectStore};

// Re-export types
pub use types::{
    ChangeAction, ChangeBatch, ChangeReceipt, ObjectFetch, PaginatedResponse, ProviderZone,
    RecordChange, RecordCursor, RecordSet,
};

// Re-export concrete implementations
pub use providers::{Route53Provider, S3ObjectStore};
