//! `dns-backup` entry point
//!
//! ```bash
//! # Snapshot every hosted zone
//! BACKUP_BUCKET=zone-backups dns-backup backup
//!
//! # Restore one snapshot into a zone
//! dns-backup restore --bucket zone-backups \
//!     --backup-key '2024-05-06_07:08:09/example.com/Z1/route53_backup.json' \
//!     --hosted-zone-id Z9
//! ```
//!
//! The result payload `{"statusCode": ..., "body": {...}}` is printed on
//! stdout; the exit code is non-zero when the status is 500.

mod cli;
mod config;
mod logging;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dns_backup_core::types::{InvocationResult, Operation};
use dns_backup_core::{BackupService, CoreResult, RestoreService, ServiceContext};
use dns_backup_provider::{create_object_store, create_provider, load_aws_config};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_format) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let result = run(&cli).await;
    match serde_json::to_string_pretty(&result) {
        Ok(payload) => println!("{payload}"),
        Err(e) => {
            tracing::error!("Failed to render result payload: {e}");
            return ExitCode::FAILURE;
        }
    }

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Runs the selected operation and renders any failure into the payload.
async fn run(cli: &Cli) -> InvocationResult {
    let operation = match cli.command {
        Command::Backup(_) => Operation::Backup,
        Command::Restore(_) => Operation::Restore,
    };

    match execute(cli).await {
        Ok(result) => result,
        Err(err) => {
            if err.is_expected() {
                tracing::warn!("{operation:?} failed: {err}");
            } else {
                tracing::error!("{operation:?} failed: {err}");
            }
            InvocationResult::failed(operation, &err)
        }
    }
}

async fn execute(cli: &Cli) -> CoreResult<InvocationResult> {
    match &cli.command {
        Command::Backup(args) => {
            let request = config::backup_request(args)?;
            let ctx = build_context(cli.region.clone()).await;
            let report = BackupService::new(ctx).backup(&request).await?;
            tracing::info!(
                "Backed up {} hosted zones to {} ({} summary writes)",
                report.zones.len(),
                report.bucket,
                report.summaries_written
            );
            Ok(InvocationResult::backup_completed(&report))
        }
        Command::Restore(args) => {
            let request = config::restore_request(args)?;
            let ctx = build_context(cli.region.clone()).await;
            let report = RestoreService::new(ctx).restore(&request).await?;
            tracing::info!(
                "Restored {} records into hosted zone {}",
                report.records_restored,
                report.restored_zone_id
            );
            Ok(InvocationResult::restore_completed(&report))
        }
    }
}

async fn build_context(region: Option<String>) -> Arc<ServiceContext> {
    let config = load_aws_config(region).await;
    tracing::debug!("AWS region: {:?}", config.region());
    Arc::new(ServiceContext::new(
        create_provider(&config),
        create_object_store(&config),
    ))
}
