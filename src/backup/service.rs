//! Full vault backups. An export is the complete folder and document lists in one json file, and an import
//! replaces everything in the vault with the contents of such a file.

use std::backtrace::Backtrace;

use chrono::NaiveDate;
use rocket::serde::json::serde_json::{self, Value};

use crate::documents::repository as document_repository;
use crate::folders::repository as folder_repository;
use crate::model::error::backup_errors::{ExportError, ImportError};
use crate::model::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::repository::VaultDb;
use crate::util::now_millis;

pub fn export_snapshot(db: &VaultDb) -> Result<Snapshot, ExportError> {
    let con = db.open_connection().map_err(|_| ExportError::DbError)?;
    let loaded = folder_repository::get_all_folders(&con).and_then(|folders| {
        document_repository::get_all_documents(&con).map(|documents| (folders, documents))
    });
    match loaded {
        Ok((folders, documents)) => Ok(Snapshot {
            version: SNAPSHOT_VERSION,
            timestamp: now_millis(),
            folders,
            documents,
        }),
        Err(e) => {
            log::error!(
                "Failed to pull the vault for export! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(ExportError::DbError)
        }
    }
}

/// name of the downloaded backup file for the passed day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("eduvault-backup-{}.json", date.format("%Y-%m-%d"))
}

/// parses and validates a backup file without touching the database
pub fn parse_snapshot(raw: &str) -> Result<Snapshot, ImportError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| ImportError::Malformed(e.to_string()))?;
    let has_collection = |key: &str| value.get(key).is_some_and(Value::is_array);
    if !has_collection("folders") || !has_collection("documents") {
        return Err(ImportError::MissingCollections);
    }
    if let Some(version) = value.get("version").and_then(Value::as_u64) {
        if version > u64::from(SNAPSHOT_VERSION) {
            return Err(ImportError::UnsupportedVersion(
                u32::try_from(version).unwrap_or(u32::MAX),
            ));
        }
    }
    serde_json::from_value(value).map_err(|e| ImportError::Malformed(e.to_string()))
}

/// validates `raw` and replaces the whole vault with it. If anything is wrong with the file the vault is left as-is
pub fn import_snapshot(raw: &str, db: &VaultDb) -> Result<Snapshot, ImportError> {
    let snapshot = parse_snapshot(raw).map_err(|e| {
        log::warn!("Rejected backup file: {e:?}");
        e
    })?;
    restore_snapshot(&snapshot, db)?;
    log::info!(
        "Restored {} folders and {} documents from backup",
        snapshot.folders.len(),
        snapshot.documents.len()
    );
    Ok(snapshot)
}

/// deletes everything in the vault and inserts the snapshot's records, all in one transaction.
/// Any failure (including duplicate ids in the snapshot) rolls the whole thing back
pub fn restore_snapshot(snapshot: &Snapshot, db: &VaultDb) -> Result<(), ImportError> {
    let mut con = db.open_connection().map_err(|_| ImportError::DbError)?;
    let restored = con.transaction().and_then(|tx| {
        document_repository::delete_all_documents(&tx)?;
        folder_repository::delete_all_folders(&tx)?;
        for folder in &snapshot.folders {
            folder_repository::insert_folder(folder, &tx)?;
        }
        for doc in &snapshot.documents {
            document_repository::insert_document(doc, &tx)?;
        }
        tx.commit()
    });
    restored.map_err(|e| {
        log::error!(
            "Failed to restore backup, nothing was changed. Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        ImportError::DbError
    })
}
