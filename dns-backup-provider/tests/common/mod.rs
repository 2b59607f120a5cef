//! Shared helpers for the live AWS integration tests

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_backup_provider::{
    DnsProvider, ObjectStore, RecordSet, create_object_store, create_provider, load_aws_config,
};
use serde_json::json;

/// Skips the test when a required environment variable is missing
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Asserts an `Option` is `Some` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Asserts a `Result` is `Ok` and unwraps it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique label for records and object keys created by a test run
pub fn generate_test_label() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// A TXT record set under `zone_name`, in the stored backup shape
pub fn test_txt_record(label: &str, zone_name: &str) -> RecordSet {
    RecordSet::new(json!({
        "Name": format!("{label}.{zone_name}"),
        "Type": "TXT",
        "TTL": 60,
        "ResourceRecords": [{"Value": "\"integration-test\""}]
    }))
}

/// Test context: live clients plus the zone and bucket under test
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub store: Arc<dyn ObjectStore>,
    pub hosted_zone_id: Option<String>,
    pub bucket: Option<String>,
}

impl TestContext {
    pub async fn from_env() -> Self {
        let config = load_aws_config(env::var("AWS_REGION").ok()).await;
        Self {
            provider: create_provider(&config),
            store: create_object_store(&config),
            hosted_zone_id: env::var("TEST_HOSTED_ZONE_ID").ok(),
            bucket: env::var("TEST_BACKUP_BUCKET").ok(),
        }
    }

    /// Name of the test zone with its trailing dot, found by listing zones.
    pub async fn find_zone_name(&self) -> Option<String> {
        let zone_id = self.hosted_zone_id.as_deref()?;
        let mut cursor: Option<String> = None;
        loop {
            let page = self.provider.list_zones(cursor.as_deref()).await.ok()?;
            if let Some(zone) = page
                .items
                .iter()
                .find(|z| z.id.rsplit('/').next() == Some(zone_id))
            {
                return Some(zone.name.clone());
            }
            cursor = page.next_cursor;
            cursor.as_ref()?;
        }
    }
}
