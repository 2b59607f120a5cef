//! Cursor-following enumeration of zones and record sets.

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{RecordSet, Zone};

/// Lists every zone and every record set, following provider pagination.
pub struct ZoneEnumerator {
    ctx: Arc<ServiceContext>,
}

impl ZoneEnumerator {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// All zones visible to the credentials, normalized, in provider order.
    pub async fn list_zones(&self) -> CoreResult<Vec<Zone>> {
        let mut zones = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = self.ctx.dns_provider.list_zones(cursor.as_deref()).await?;
            zones.extend(page.items.iter().map(Zone::from));
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        log::debug!("Enumerated {} hosted zones", zones.len());
        Ok(zones)
    }

    /// Every record set of `zone_id`, in provider order.
    pub async fn fetch_records(&self, zone_id: &str) -> CoreResult<Vec<RecordSet>> {
        let mut records = Vec::new();
        let mut cursor = None;
        let mut pages = 0usize;
        loop {
            let page = self
                .ctx
                .dns_provider
                .list_record_sets(zone_id, cursor.as_ref())
                .await?;
            pages += 1;
            records.extend(page.items);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        log::debug!(
            "Fetched {} record sets from hosted zone {zone_id} in {pages} page(s)",
            records.len()
        );
        Ok(records)
    }
}
