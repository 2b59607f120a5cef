//! S3 `ObjectStore` implementation

use async_trait::async_trait;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::primitives::ByteStream;

use crate::error::{ProviderError, Result};
use crate::providers::common::classify_sdk_error;
use crate::traits::{ErrorContext, ObjectStore, ProviderErrorMapper};
use crate::types::ObjectFetch;

use super::{PROVIDER_NAME, S3ObjectStore};

fn bucket_context(bucket: &str) -> ErrorContext {
    ErrorContext {
        bucket: Some(bucket.to_string()),
        ..Default::default()
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        log::debug!("[{PROVIDER_NAME}] PutObject s3://{bucket}/{key} ({} bytes)", body.len());

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| self.map_failure(classify_sdk_error(&e), bucket_context(bucket)))?;
        Ok(())
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectFetch> {
        log::debug!("[{PROVIDER_NAME}] GetObject s3://{bucket}/{key}");

        match self.client.get_object().bucket(bucket).key(key).send().await {
            Ok(output) => {
                let bytes = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| ProviderError::NetworkError {
                        provider: PROVIDER_NAME.to_string(),
                        detail: format!("failed to read s3://{bucket}/{key}: {e}"),
                    })?
                    .into_bytes();
                Ok(ObjectFetch::Found(bytes.to_vec()))
            }
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(GetObjectError::is_no_such_key) =>
            {
                log::debug!("[{PROVIDER_NAME}] s3://{bucket}/{key} does not exist");
                Ok(ObjectFetch::NotFound)
            }
            Err(err) => Err(self.map_failure(classify_sdk_error(&err), bucket_context(bucket))),
        }
    }
}
