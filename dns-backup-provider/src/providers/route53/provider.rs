//! Route 53 `DnsProvider` implementation

use async_trait::async_trait;
use aws_sdk_route53::types::{
    Change, ChangeAction as SdkChangeAction, ChangeBatch as SdkChangeBatch, RrType,
};

use crate::error::Result;
use crate::providers::common::{classify_sdk_error, truncate_for_log};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{
    ChangeAction, ChangeBatch, ChangeReceipt, PaginatedResponse, ProviderZone, RecordCursor,
    RecordSet,
};

use super::{PROVIDER_NAME, Route53Provider, Route53RecordSet};

impl Route53Provider {
    fn sdk_action(action: ChangeAction) -> SdkChangeAction {
        match action {
            ChangeAction::Create => SdkChangeAction::Create,
            ChangeAction::Upsert => SdkChangeAction::Upsert,
        }
    }

    /// Converts a change batch of stored records into the SDK request shape.
    pub(crate) fn to_sdk_change_batch(&self, batch: &ChangeBatch) -> Result<SdkChangeBatch> {
        let changes = batch
            .changes
            .iter()
            .map(|change| {
                let record = Route53RecordSet::from_record_set(&change.record_set).map_err(|e| {
                    self.serialization_error(format!("not a Route 53 record set: {e}"))
                })?;
                let resource_record_set =
                    record.into_sdk().map_err(|e| self.serialization_error(e))?;
                Change::builder()
                    .action(Self::sdk_action(change.action))
                    .resource_record_set(resource_record_set)
                    .build()
                    .map_err(|e| self.serialization_error(e))
            })
            .collect::<Result<Vec<_>>>()?;

        SdkChangeBatch::builder()
            .set_changes(Some(changes))
            .set_comment(batch.comment.clone())
            .build()
            .map_err(|e| self.serialization_error(e))
    }

    /// Cursor for the next record page. A truncated listing without a
    /// next name and type cannot be continued and is an error.
    fn next_record_cursor(
        &self,
        is_truncated: bool,
        name: Option<String>,
        record_type: Option<String>,
        identifier: Option<String>,
    ) -> Result<Option<RecordCursor>> {
        if !is_truncated {
            return Ok(None);
        }
        match (name, record_type) {
            (Some(name), Some(record_type)) => Ok(Some(RecordCursor {
                name,
                record_type,
                identifier,
            })),
            (name, record_type) => Err(self.parse_error(format!(
                "truncated record listing without a continuation point \
                 (NextRecordName={name:?}, NextRecordType={record_type:?})"
            ))),
        }
    }
}

#[async_trait]
impl DnsProvider for Route53Provider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_zones(&self, cursor: Option<&str>) -> Result<PaginatedResponse<ProviderZone>> {
        log::debug!("[{PROVIDER_NAME}] ListHostedZones marker={cursor:?}");

        let output = self
            .client
            .list_hosted_zones()
            .set_marker(cursor.map(str::to_string))
            .send()
            .await
            .map_err(|e| self.map_failure(classify_sdk_error(&e), ErrorContext::default()))?;

        let zones: Vec<ProviderZone> = output
            .hosted_zones
            .into_iter()
            .map(|zone| ProviderZone {
                id: zone.id,
                name: zone.name,
            })
            .collect();

        let next_cursor = if output.is_truncated {
            output.next_marker
        } else {
            None
        };

        log::debug!(
            "[{PROVIDER_NAME}] ListHostedZones returned {} zones, truncated={}",
            zones.len(),
            next_cursor.is_some()
        );
        Ok(PaginatedResponse::new(zones, next_cursor))
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<PaginatedResponse<RecordSet, RecordCursor>> {
        log::debug!("[{PROVIDER_NAME}] ListResourceRecordSets zone={zone_id} cursor={cursor:?}");

        let mut request = self.client.list_resource_record_sets().hosted_zone_id(zone_id);
        if let Some(cursor) = cursor {
            request = request
                .start_record_name(cursor.name.as_str())
                .start_record_type(RrType::from(cursor.record_type.as_str()))
                .set_start_record_identifier(cursor.identifier.clone());
        }

        let output = request.send().await.map_err(|e| {
            let context = ErrorContext {
                zone_id: Some(zone_id.to_string()),
                ..Default::default()
            };
            self.map_failure(classify_sdk_error(&e), context)
        })?;

        let records = output
            .resource_record_sets
            .iter()
            .map(|rrs| {
                Route53RecordSet::from(rrs)
                    .into_record_set()
                    .map_err(|e| self.parse_error(e))
            })
            .collect::<Result<Vec<_>>>()?;

        let next_cursor = self.next_record_cursor(
            output.is_truncated,
            output.next_record_name,
            output.next_record_type.map(|t| t.as_str().to_string()),
            output.next_record_identifier,
        )?;

        Ok(PaginatedResponse::new(records, next_cursor))
    }

    async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> Result<ChangeReceipt> {
        let sdk_batch = self.to_sdk_change_batch(batch)?;
        log::debug!(
            "[{PROVIDER_NAME}] ChangeResourceRecordSets zone={zone_id} changes={}",
            batch.len()
        );

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(sdk_batch)
            .send()
            .await
            .map_err(|e| {
                let failure = classify_sdk_error(&e);
                log::debug!(
                    "[{PROVIDER_NAME}] ChangeResourceRecordSets failed: {}",
                    truncate_for_log(&format!("{failure:?}"), 500)
                );
                let context = ErrorContext {
                    zone_id: Some(zone_id.to_string()),
                    ..Default::default()
                };
                self.map_failure(failure, context)
            })?;

        let receipt = output.change_info().map_or_else(
            || ChangeReceipt {
                id: String::new(),
                status: "UNKNOWN".to_string(),
            },
            |info| ChangeReceipt {
                id: info.id().to_string(),
                status: info.status().as_str().to_string(),
            },
        );
        log::debug!(
            "[{PROVIDER_NAME}] change {} accepted with status {}",
            receipt.id,
            receipt.status
        );
        Ok(receipt)
    }
}
