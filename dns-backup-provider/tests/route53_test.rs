//! Route 53 integration tests
//!
//! Run with:
//! ```bash
//! AWS_REGION=us-east-1 TEST_HOSTED_ZONE_ID=Z0123456789 \
//!     cargo test -p dns-backup-provider --test route53_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_label, test_txt_record};
use dns_backup_provider::{ChangeAction, ChangeBatch, ProviderError};

#[tokio::test]
#[ignore = "integration test: requires AWS credentials"]
async fn test_route53_list_zones() {
    skip_if_no_credentials!("AWS_REGION");

    let ctx = TestContext::from_env().await;
    let page = require_ok!(ctx.provider.list_zones(None).await, "list_zones failed");
    for zone in &page.items {
        assert!(zone.id.starts_with("/hostedzone/"), "unexpected id {}", zone.id);
        assert!(zone.name.ends_with('.'), "unexpected name {}", zone.name);
    }

    println!("✓ list_zones returned {} zones", page.items.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials and TEST_HOSTED_ZONE_ID"]
async fn test_route53_list_record_sets_includes_apex() {
    skip_if_no_credentials!("AWS_REGION", "TEST_HOSTED_ZONE_ID");

    let ctx = TestContext::from_env().await;
    let zone_id = require_some!(ctx.hosted_zone_id.clone());
    let page = require_ok!(
        ctx.provider.list_record_sets(&zone_id, None).await,
        "list_record_sets failed"
    );

    let types: Vec<_> = page.items.iter().filter_map(|r| r.record_type()).collect();
    assert!(types.contains(&"NS"), "zone should have NS records");
    assert!(types.contains(&"SOA"), "zone should have an SOA record");
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials and TEST_HOSTED_ZONE_ID"]
async fn test_route53_create_then_duplicate_create() {
    skip_if_no_credentials!("AWS_REGION", "TEST_HOSTED_ZONE_ID");

    let ctx = TestContext::from_env().await;
    let zone_id = require_some!(ctx.hosted_zone_id.clone());
    let zone_name = require_some!(ctx.find_zone_name().await, "test zone not found");
    let record = test_txt_record(&generate_test_label(), &zone_name);

    let create = ChangeBatch::uniform(ChangeAction::Create, std::slice::from_ref(&record))
        .with_comment("integration test");
    let receipt = require_ok!(
        ctx.provider.change_record_sets(&zone_id, &create).await,
        "first CREATE failed"
    );
    assert!(!receipt.id.is_empty());

    let duplicate = ctx.provider.change_record_sets(&zone_id, &create).await;
    assert!(
        matches!(duplicate, Err(ProviderError::RecordExists { .. })),
        "second CREATE should conflict: {duplicate:?}"
    );

    let upsert = ChangeBatch::uniform(ChangeAction::Upsert, std::slice::from_ref(&record));
    require_ok!(
        ctx.provider.change_record_sets(&zone_id, &upsert).await,
        "UPSERT over existing record failed"
    );

    println!("✓ created {:?}; clean it up manually", record.name());
}

#[tokio::test]
#[ignore = "integration test: requires AWS credentials"]
async fn test_route53_unknown_zone() {
    skip_if_no_credentials!("AWS_REGION");

    let ctx = TestContext::from_env().await;
    let result = ctx.provider.list_record_sets("ZNOTAREALZONE00", None).await;
    assert!(
        matches!(
            result,
            Err(ProviderError::ZoneNotFound { .. } | ProviderError::InvalidParameter { .. })
        ),
        "unexpected result: {result:?}"
    );
}
