//! Amazon S3 object store

mod error;
mod store;

use aws_sdk_s3::Client;

pub(crate) const PROVIDER_NAME: &str = "s3";

/// Object store backed by an S3 bucket
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    pub(crate) client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store from a loaded AWS configuration.
    pub fn from_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}
