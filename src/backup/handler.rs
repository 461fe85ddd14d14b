use rocket::data::{Data, ToByteUnit};
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::State;

use crate::backup::service;
use crate::config::UploadConfig;
use crate::guard::Unlocked;
use crate::model::error::backup_errors::{ExportError, ImportError};
use crate::model::response::backup_responses::{
    ExportVaultResponse, ImportVaultResponse, SnapshotDownload,
};
use crate::model::response::BasicMessage;
use crate::repository::VaultDb;

#[get("/export")]
pub fn export_vault(_unlocked: Unlocked, db: &State<VaultDb>) -> ExportVaultResponse {
    match service::export_snapshot(db) {
        Ok(snapshot) => {
            let file_name = service::export_file_name(chrono::Local::now().date_naive());
            ExportVaultResponse::Success(SnapshotDownload {
                snapshot: Json(snapshot),
                disposition: Header::new(
                    "Content-Disposition",
                    format!("attachment; filename=\"{file_name}\""),
                ),
            })
        }
        Err(ExportError::DbError) => ExportVaultResponse::Failure(BasicMessage::new(
            "Failed to export the vault. Check server logs for details",
        )),
    }
}

/// replaces the entire vault with the posted backup file
#[post("/import", data = "<data>")]
pub async fn import_vault(
    data: Data<'_>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
    uploads: &State<UploadConfig>,
) -> ImportVaultResponse {
    let raw = match data
        .open(uploads.max_import_size_mb.mebibytes())
        .into_string()
        .await
    {
        Ok(raw) if raw.is_complete() => raw.into_inner(),
        Ok(_) => {
            return ImportVaultResponse::TooLarge(BasicMessage::new(
                "Backup file is larger than the configured import limit.",
            ))
        }
        Err(e) => {
            log::error!("Failed to read backup upload. Exception is {e:?}");
            return ImportVaultResponse::BadRequest(BasicMessage::new(
                "Backup file could not be read as text.",
            ));
        }
    };
    match service::import_snapshot(&raw, db) {
        Ok(_) => ImportVaultResponse::Success(()),
        Err(ImportError::Malformed(reason)) => ImportVaultResponse::BadRequest(BasicMessage::new(
            &format!("Backup file is not valid: {reason}"),
        )),
        Err(ImportError::MissingCollections) => ImportVaultResponse::BadRequest(
            BasicMessage::new("Backup file must contain both folders and documents."),
        ),
        Err(ImportError::UnsupportedVersion(version)) => {
            ImportVaultResponse::BadRequest(BasicMessage::new(&format!(
                "Backup file version {version} is newer than this server supports."
            )))
        }
        Err(ImportError::DbError) => ImportVaultResponse::Failure(BasicMessage::new(
            "Failed to restore backup. The vault was not changed. Check server logs for details",
        )),
    }
}
