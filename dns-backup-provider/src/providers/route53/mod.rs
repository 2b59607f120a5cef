//! Amazon Route 53 DNS provider

mod error;
mod provider;
mod types;

use aws_sdk_route53::Client;

pub(crate) use types::Route53RecordSet;

/// Provider identifier used in errors and log prefixes
pub(crate) const PROVIDER_NAME: &str = "route53";

/// Route 53 DNS provider backed by the AWS SDK client
#[derive(Debug, Clone)]
pub struct Route53Provider {
    pub(crate) client: Client,
}

impl Route53Provider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a provider from a loaded AWS configuration.
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}
