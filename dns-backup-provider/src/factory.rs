//! Factory functions for the AWS-backed capabilities.

use std::sync::Arc;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_route53::config::Region;

use crate::providers::{Route53Provider, S3ObjectStore};
use crate::traits::{DnsProvider, ObjectStore};

/// Loads the shared AWS configuration.
///
/// An explicit `region` wins; otherwise the standard chain applies
/// (`AWS_REGION`, profile, instance metadata). Credentials always come from
/// the default provider chain.
pub async fn load_aws_config(region: Option<String>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(Region::new))
        .or_default_provider()
        .or_else(Region::new("us-east-1"));
    aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

/// Creates a [`DnsProvider`] backed by Route 53.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn demo() {
/// let config = dns_backup_provider::load_aws_config(Some("eu-west-1".into())).await;
/// let provider = dns_backup_provider::create_provider(&config);
/// assert_eq!(provider.id(), "route53");
/// # }
/// ```
pub fn create_provider(config: &SdkConfig) -> Arc<dyn DnsProvider> {
    Arc::new(Route53Provider::from_config(config))
}

/// Creates an [`ObjectStore`] backed by S3.
pub fn create_object_store(config: &SdkConfig) -> Arc<dyn ObjectStore> {
    Arc::new(S3ObjectStore::from_config(config))
}
