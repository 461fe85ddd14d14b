use std::backtrace::Backtrace;

use rusqlite::Connection;

use crate::documents::data_uri::{self, DataUri};
use crate::documents::repository as document_repository;
use crate::folders::repository as folder_repository;
use crate::folders::tree::sort_documents;
use crate::model::error::document_errors::{
    CreateDocumentError, DeleteDocumentError, GetDocumentError, UpdateDocumentError,
};
use crate::model::repository::{DocumentMetadata, DocumentRecord};
use crate::model::request::document_requests::UpdateDocumentRequest;
use crate::model::top_level::normalize_folder_ref;
use crate::repository::VaultDb;
use crate::util::{new_id, now_millis};

/// stores an uploaded file in the vault.
///
/// The raw bytes are converted to a data uri before anything is written, so the record is never persisted with
/// partial contents. `folder_id` may be any spelling of the top level
pub fn upload_document(
    name: &str,
    mime_type: &str,
    bytes: &[u8],
    folder_id: Option<&str>,
    db: &VaultDb,
) -> Result<DocumentRecord, CreateDocumentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreateDocumentError::EmptyName);
    }
    let folder_id = normalize_folder_ref(folder_id);
    let con = db.open_connection().map_err(|_| CreateDocumentError::DbError)?;
    if let Some(id) = &folder_id {
        match folder_repository::get_folder(id, &con) {
            Ok(Some(_)) => { /* no op */ }
            Ok(None) => return Err(CreateDocumentError::FolderNotFound),
            Err(e) => {
                log::error!(
                    "Failed to check if folder {id} exists before upload! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(CreateDocumentError::DbError);
            }
        }
    }
    let mime_type = data_uri::normalize_mime_type(mime_type).to_string();
    let doc = DocumentRecord {
        id: new_id(),
        name: name.to_string(),
        folder_id,
        data: data_uri::encode(&mime_type, bytes),
        mime_type,
        uploaded_at: now_millis(),
        size: bytes.len() as u64,
        summary: None,
        tags: Vec::new(),
    };
    if let Err(e) = document_repository::save_document(&doc, &con) {
        log::error!(
            "Failed to save uploaded document {}! Error is {e:?}\n{}",
            doc.name,
            Backtrace::force_capture()
        );
        return Err(CreateDocumentError::DbError);
    }
    log::info!("Uploaded document {} ({} bytes)", doc.id, doc.size);
    Ok(doc)
}

/// every document in the vault without its contents, newest upload first
pub fn list_documents(db: &VaultDb) -> Result<Vec<DocumentMetadata>, GetDocumentError> {
    let con = db.open_connection().map_err(|_| GetDocumentError::DbError)?;
    let mut documents = document_repository::get_all_document_metadata(&con).map_err(|e| {
        log::error!(
            "Failed to pull documents from the database! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        GetDocumentError::DbError
    })?;
    sort_documents(&mut documents);
    Ok(documents)
}

pub fn get_document(id: &str, db: &VaultDb) -> Result<DocumentRecord, GetDocumentError> {
    let con = db.open_connection().map_err(|_| GetDocumentError::DbError)?;
    match document_repository::get_document(id, &con) {
        Ok(Some(doc)) => Ok(doc),
        Ok(None) => Err(GetDocumentError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to pull document {id} from the database! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetDocumentError::DbError)
        }
    }
}

/// the original bytes and mime type of the document
pub fn get_document_content(id: &str, db: &VaultDb) -> Result<DataUri, GetDocumentError> {
    let doc = get_document(id, db)?;
    data_uri::decode(&doc.data).map_err(|e| {
        log::error!("Document {id} has unreadable data: {e:?}");
        GetDocumentError::InvalidData
    })
}

/// renames, moves and/or retags a document. The contents and upload date are kept as-is
pub fn update_document(
    request: &UpdateDocumentRequest,
    db: &VaultDb,
) -> Result<DocumentRecord, UpdateDocumentError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(UpdateDocumentError::EmptyName);
    }
    let con = db.open_connection().map_err(|_| UpdateDocumentError::DbError)?;
    let existing = match document_repository::get_document(&request.id, &con) {
        Ok(Some(doc)) => doc,
        Ok(None) => return Err(UpdateDocumentError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to pull document {} for update! Error is {e:?}\n{}",
                request.id,
                Backtrace::force_capture()
            );
            return Err(UpdateDocumentError::DbError);
        }
    };
    if let Some(folder_id) = &request.folder_id {
        match folder_repository::get_folder(folder_id, &con) {
            Ok(Some(_)) => { /* no op */ }
            Ok(None) => return Err(UpdateDocumentError::FolderNotFound),
            Err(e) => {
                log::error!(
                    "Failed to check if folder {folder_id} exists! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(UpdateDocumentError::DbError);
            }
        }
    }
    let updated = DocumentRecord {
        name: name.to_string(),
        folder_id: request.folder_id.clone(),
        tags: request.tags.clone(),
        ..existing
    };
    save(&updated, &con).map_err(|_| UpdateDocumentError::DbError)?;
    Ok(updated)
}

/// stores the latest generated summary on the document
pub fn save_summary(id: &str, summary: &str, db: &VaultDb) -> Result<(), UpdateDocumentError> {
    let con = db.open_connection().map_err(|_| UpdateDocumentError::DbError)?;
    let existing = match document_repository::get_document(id, &con) {
        Ok(Some(doc)) => doc,
        Ok(None) => return Err(UpdateDocumentError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to pull document {id} to save its summary! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(UpdateDocumentError::DbError);
        }
    };
    let updated = DocumentRecord {
        summary: Some(summary.to_string()),
        ..existing
    };
    save(&updated, &con).map_err(|_| UpdateDocumentError::DbError)
}

pub fn delete_document(id: &str, db: &VaultDb) -> Result<(), DeleteDocumentError> {
    let con = db.open_connection().map_err(|_| DeleteDocumentError::DbError)?;
    match document_repository::get_document(id, &con) {
        Ok(Some(_)) => { /* no op */ }
        Ok(None) => return Err(DeleteDocumentError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to check if document {id} exists! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            return Err(DeleteDocumentError::DbError);
        }
    }
    document_repository::delete_document(id, &con).map_err(|e| {
        log::error!(
            "Failed to delete document {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        DeleteDocumentError::DbError
    })
}

fn save(doc: &DocumentRecord, con: &Connection) -> Result<(), rusqlite::Error> {
    document_repository::save_document(doc, con).map_err(|e| {
        log::error!(
            "Failed to save document {}! Error is {e:?}\n{}",
            doc.id,
            Backtrace::force_capture()
        );
        e
    })
}
