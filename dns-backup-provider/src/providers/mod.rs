//! Service implementations

/// Shared utilities used by the implementations.
pub(crate) mod common;

mod route53;
mod s3;

pub use route53::Route53Provider;
pub use s3::S3ObjectStore;
