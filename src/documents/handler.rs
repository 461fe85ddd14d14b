use rocket::form::Form;
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::tokio::io::AsyncReadExt;
use rocket::State;

use crate::documents::service;
use crate::guard::Unlocked;
use crate::model::error::document_errors::{
    CreateDocumentError, DeleteDocumentError, GetDocumentError, UpdateDocumentError,
};
use crate::model::request::document_requests::{DocumentUpload, UpdateDocumentRequest};
use crate::model::repository::DocumentMetadata;
use crate::model::response::document_responses::{
    CreateDocumentResponse, DeleteDocumentResponse, DownloadDocumentResponse, GetDocumentResponse,
    ListDocumentsResponse, UpdateDocumentResponse,
};
use crate::model::response::BasicMessage;
use crate::repository::VaultDb;

/// metadata for every document in the vault, newest first. Contents are left out
#[get("/")]
pub fn list_documents(_unlocked: Unlocked, db: &State<VaultDb>) -> ListDocumentsResponse {
    match service::list_documents(db) {
        Ok(documents) => ListDocumentsResponse::Success(Json(documents)),
        Err(_) => ListDocumentsResponse::DocumentDbError(BasicMessage::new(
            "Failed to pull documents from database. Check server logs for details",
        )),
    }
}

/// the full document record, contents included
#[get("/<id>")]
pub fn get_document(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> GetDocumentResponse {
    match service::get_document(id, db) {
        Ok(doc) => GetDocumentResponse::Success(Json(doc)),
        Err(GetDocumentError::NotFound) => GetDocumentResponse::DocumentNotFound(
            BasicMessage::new("The document with the passed id could not be found."),
        ),
        Err(_) => GetDocumentResponse::DocumentDbError(BasicMessage::new(
            "Failed to pull document from database. Check server logs for details",
        )),
    }
}

/// the original file, served with its own content type
#[get("/<id>/content")]
pub fn download_document(
    id: &str,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> DownloadDocumentResponse {
    match service::get_document_content(id, db) {
        Ok(content) => {
            let content_type =
                ContentType::parse_flexible(&content.mime_type).unwrap_or(ContentType::Binary);
            DownloadDocumentResponse::Success((content_type, content.bytes))
        }
        Err(GetDocumentError::NotFound) => DownloadDocumentResponse::DocumentNotFound(
            BasicMessage::new("The document with the passed id could not be found."),
        ),
        Err(GetDocumentError::InvalidData) => DownloadDocumentResponse::DocumentDbError(
            BasicMessage::new("The stored contents of this document are corrupt."),
        ),
        Err(GetDocumentError::DbError) => DownloadDocumentResponse::DocumentDbError(
            BasicMessage::new("Failed to pull document from database. Check server logs for details"),
        ),
    }
}

/// multipart upload with a `file` part and an optional `folderId` part
#[post("/", data = "<upload>")]
pub async fn upload_document(
    upload: Form<DocumentUpload<'_>>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> CreateDocumentResponse {
    let name = upload
        .file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();
    let mime_type = upload
        .file
        .content_type()
        .map(|ct| format!("{}/{}", ct.top(), ct.sub()))
        .unwrap_or_default();
    let mut bytes = Vec::<u8>::new();
    let read = match upload.file.open().await {
        Ok(reader) => {
            rocket::tokio::pin!(reader);
            reader.read_to_end(&mut bytes).await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = read {
        log::error!("Failed to read uploaded file {name}. Exception is {e:?}");
        return CreateDocumentResponse::Failure(BasicMessage::new(
            "Failed to read uploaded file. Check server logs for details",
        ));
    }
    match service::upload_document(&name, &mime_type, &bytes, upload.folder_id.as_deref(), db) {
        Ok(doc) => CreateDocumentResponse::Success(Json(DocumentMetadata::from(&doc))),
        Err(CreateDocumentError::EmptyName) => {
            CreateDocumentResponse::BadRequest(BasicMessage::new("File name cannot be empty."))
        }
        Err(CreateDocumentError::FolderNotFound) => CreateDocumentResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(CreateDocumentError::DbError) => CreateDocumentResponse::Failure(BasicMessage::new(
            "Failed to save document. Check server logs for details",
        )),
    }
}

/// renames, moves and retags a document
#[put("/", data = "<request>")]
pub fn update_document(
    request: Json<UpdateDocumentRequest>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> UpdateDocumentResponse {
    match service::update_document(&request, db) {
        Ok(doc) => UpdateDocumentResponse::Success(Json(DocumentMetadata::from(&doc))),
        Err(UpdateDocumentError::EmptyName) => {
            UpdateDocumentResponse::BadRequest(BasicMessage::new("File name cannot be empty."))
        }
        Err(UpdateDocumentError::NotFound) => UpdateDocumentResponse::NotFound(BasicMessage::new(
            "The document with the passed id could not be found.",
        )),
        Err(UpdateDocumentError::FolderNotFound) => UpdateDocumentResponse::NotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(UpdateDocumentError::DbError) => UpdateDocumentResponse::DocumentDbError(
            BasicMessage::new("Failed to update document. Check server logs for details"),
        ),
    }
}

#[delete("/<id>")]
pub fn delete_document(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> DeleteDocumentResponse {
    match service::delete_document(id, db) {
        Ok(()) => DeleteDocumentResponse::Success(()),
        Err(DeleteDocumentError::NotFound) => DeleteDocumentResponse::DocumentNotFound(
            BasicMessage::new("The document with the passed id could not be found."),
        ),
        Err(DeleteDocumentError::DbError) => DeleteDocumentResponse::DocumentDbError(
            BasicMessage::new("Failed to delete document. Check server logs for details"),
        ),
    }
}
