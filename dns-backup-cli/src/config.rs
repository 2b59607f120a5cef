//! Turns command-line arguments into service requests.
//!
//! Missing inputs are reported as `CoreError::Configuration` rather than as
//! usage errors, so every invocation still ends with a result payload.

use std::io::Read;
use std::path::Path;

use dns_backup_core::types::{BackupRequest, ChangeAction, RestoreEvent, RestoreRequest};
use dns_backup_core::{CoreError, CoreResult};

use crate::cli::{BackupArgs, RestoreArgs};

fn required(value: Option<String>, what: &str) -> CoreResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| CoreError::Configuration(format!("missing {what}")))
}

pub fn backup_request(args: &BackupArgs) -> CoreResult<BackupRequest> {
    let bucket = required(args.bucket.clone(), "backup bucket (--bucket or BACKUP_BUCKET)")?;
    Ok(BackupRequest::new(bucket, args.layout))
}

pub fn restore_request(args: &RestoreArgs) -> CoreResult<RestoreRequest> {
    let event = match &args.event {
        Some(source) => read_event(source)?,
        None => RestoreEvent::default(),
    };

    let bucket = required(args.bucket.clone(), "backup bucket (--bucket or BACKUP_BUCKET)")?;
    let backup_key = required(
        args.backup_key.clone().or(event.backup_key),
        "backup_key (--backup-key or event)",
    )?;
    let hosted_zone_id = required(
        args.hosted_zone_id.clone().or(event.hosted_zone_id),
        "hosted_zone_id (--hosted-zone-id or event)",
    )?;

    Ok(RestoreRequest {
        bucket,
        backup_key,
        hosted_zone_id,
        mode: if args.upsert {
            ChangeAction::Upsert
        } else {
            ChangeAction::Create
        },
        dry_run: args.dry_run,
    })
}

fn read_event(source: &Path) -> CoreResult<RestoreEvent> {
    let text = if source == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| CoreError::Configuration(format!("failed to read event from stdin: {e}")))?;
        text
    } else {
        std::fs::read_to_string(source).map_err(|e| {
            CoreError::Configuration(format!("failed to read event {}: {e}", source.display()))
        })?
    };
    parse_event(&text)
}

fn parse_event(text: &str) -> CoreResult<RestoreEvent> {
    serde_json::from_str(text)
        .map_err(|e| CoreError::Configuration(format!("invalid restore event: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dns_backup_core::BackupLayout;
    use std::path::PathBuf;

    fn restore_args() -> RestoreArgs {
        RestoreArgs {
            bucket: Some("zone-backups".to_string()),
            backup_key: None,
            hosted_zone_id: None,
            event: None,
            upsert: false,
            dry_run: false,
        }
    }

    fn write_event(body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dns-backup-event-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_bucket_is_configuration_error() {
        let args = BackupArgs {
            bucket: None,
            layout: BackupLayout::ZoneScoped,
        };
        assert!(matches!(backup_request(&args), Err(CoreError::Configuration(_))));

        let blank = BackupArgs {
            bucket: Some("  ".to_string()),
            layout: BackupLayout::Basic,
        };
        assert!(matches!(backup_request(&blank), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn restore_from_flags() {
        let mut args = restore_args();
        args.backup_key = Some("k.json".to_string());
        args.hosted_zone_id = Some("Z9".to_string());
        args.upsert = true;

        let request = restore_request(&args).unwrap();
        assert_eq!(request.backup_key, "k.json");
        assert_eq!(request.hosted_zone_id, "Z9");
        assert_eq!(request.mode, ChangeAction::Upsert);
    }

    #[test]
    fn restore_from_event_file_with_flag_override() {
        let path = write_event(r#"{"backup_key": "from-event.json", "hosted_zone_id": "ZEVENT"}"#);
        let mut args = restore_args();
        args.event = Some(path.clone());
        args.hosted_zone_id = Some("ZFLAG".to_string());

        let request = restore_request(&args).unwrap();
        std::fs::remove_file(path).ok();

        assert_eq!(request.backup_key, "from-event.json");
        assert_eq!(request.hosted_zone_id, "ZFLAG");
        assert_eq!(request.mode, ChangeAction::Create);
    }

    #[test]
    fn missing_zone_id_is_configuration_error() {
        let mut args = restore_args();
        args.backup_key = Some("k.json".to_string());
        let err = restore_request(&args).unwrap_err();
        assert!(err.to_string().contains("hosted_zone_id"));
    }

    #[test]
    fn malformed_event() {
        assert!(matches!(
            parse_event("{not json"),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn unreadable_event_file() {
        let mut args = restore_args();
        args.event = Some(PathBuf::from("/nonexistent/dns-backup/event.json"));
        assert!(matches!(restore_request(&args), Err(CoreError::Configuration(_))));
    }
}
