use rocket::http::ContentType;
use rocket::serde::json::Json;

use crate::model::repository::{DocumentMetadata, DocumentRecord};
use crate::model::response::BasicMessage;

type NoContent = ();

#[derive(Responder)]
pub enum ListDocumentsResponse {
    #[response(status = 200)]
    Success(Json<Vec<DocumentMetadata>>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetDocumentResponse {
    #[response(status = 200)]
    Success(Json<DocumentRecord>),
    #[response(status = 404, content_type = "json")]
    DocumentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DownloadDocumentResponse {
    #[response(status = 200)]
    Success((ContentType, Vec<u8>)),
    #[response(status = 404, content_type = "json")]
    DocumentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateDocumentResponse {
    #[response(status = 201)]
    Success(Json<DocumentMetadata>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateDocumentResponse {
    #[response(status = 200)]
    Success(Json<DocumentMetadata>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteDocumentResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 404, content_type = "json")]
    DocumentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}
