use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::folders::tree::Breadcrumb;
use crate::model::repository::{DocumentMetadata, Folder};
use crate::model::response::BasicMessage;

type NoContent = ();

/// a folder as shown inside a listing, along with how many things are directly inside it
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    #[serde(flatten)]
    pub folder: Folder,
    pub item_count: usize,
}

/// everything needed to draw one screen of the vault
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct VaultViewResponse {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub pinned: Vec<FolderSummary>,
    pub others: Vec<FolderSummary>,
    pub documents: Vec<DocumentMetadata>,
}

#[derive(Responder)]
pub enum GetVaultViewResponse {
    #[response(status = 200)]
    Success(Json<VaultViewResponse>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetFolderResponse {
    #[response(status = 200)]
    Success(Json<Folder>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum CreateFolderResponse {
    #[response(status = 201)]
    Success(Json<Folder>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ParentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateFolderResponse {
    #[response(status = 200)]
    Success(Json<Folder>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    ParentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteFolderResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    FolderNotEmpty(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    FolderNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    FolderDbError(Json<BasicMessage>),
}
