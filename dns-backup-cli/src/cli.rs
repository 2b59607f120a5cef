//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dns_backup_core::BackupLayout;

#[derive(Debug, Parser)]
#[command(name = "dns-backup")]
#[command(about = "Back up Route 53 hosted zones to S3 and restore them", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AWS region (falls back to the SDK default chain)
    #[arg(long, env = "AWS_REGION", global = true)]
    pub region: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write every hosted zone to the backup bucket
    Backup(BackupArgs),

    /// Re-create the records of one backup in a hosted zone
    Restore(RestoreArgs),
}

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Destination bucket
    #[arg(long, env = "BACKUP_BUCKET")]
    pub bucket: Option<String>,

    /// Key layout: `basic` or `zone-scoped`
    #[arg(long, env = "BACKUP_LAYOUT", default_value_t = BackupLayout::ZoneScoped)]
    pub layout: BackupLayout,
}

#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Bucket holding the backup
    #[arg(long, env = "BACKUP_BUCKET")]
    pub bucket: Option<String>,

    /// Key of the backup document
    #[arg(long)]
    pub backup_key: Option<String>,

    /// Hosted zone receiving the records
    #[arg(long)]
    pub hosted_zone_id: Option<String>,

    /// JSON event `{"backup_key": ..., "hosted_zone_id": ...}`; `-` reads stdin
    #[arg(long, value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// Submit UPSERT instead of CREATE changes
    #[arg(long)]
    pub upsert: bool,

    /// Plan the batches without submitting them
    #[arg(long)]
    pub dry_run: bool,
}
