use rocket::serde::json::Json;
use rocket::State;

use crate::folders::service;
use crate::guard::Unlocked;
use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, GetVaultViewError, UpdateFolderError,
};
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::folder_responses::{
    CreateFolderResponse, DeleteFolderResponse, GetFolderResponse, GetVaultViewResponse,
    UpdateFolderResponse,
};
use crate::model::response::BasicMessage;
use crate::model::top_level::normalize_folder_ref;
use crate::repository::VaultDb;

/// lists the contents of a folder. Leaving `folder` out (or passing `root`) shows the top level
#[get("/?<folder>&<search>")]
pub fn get_vault_view(
    folder: Option<&str>,
    search: Option<&str>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> GetVaultViewResponse {
    let active = normalize_folder_ref(folder);
    match service::get_vault_view(active.as_deref(), search, db) {
        Ok(view) => GetVaultViewResponse::Success(Json::from(view)),
        Err(GetVaultViewError::FolderNotFound) => GetVaultViewResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(GetVaultViewError::DbError) => GetVaultViewResponse::FolderDbError(BasicMessage::new(
            "Failed to pull vault info from database. Check server logs for details",
        )),
    }
}

#[get("/<id>")]
pub fn get_folder(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> GetFolderResponse {
    match service::get_folder(id, db) {
        Ok(folder) => GetFolderResponse::Success(Json::from(folder)),
        Err(GetFolderError::NotFound) => GetFolderResponse::FolderNotFound(BasicMessage::new(
            "The folder with the passed id could not be found.",
        )),
        Err(GetFolderError::DbError) => GetFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to pull folder info from database. Check server logs for details",
        )),
    }
}

#[post("/", data = "<folder>")]
pub fn create_folder(
    folder: Json<CreateFolderRequest>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> CreateFolderResponse {
    match service::create_folder(&folder, db) {
        Ok(created) => CreateFolderResponse::Success(Json::from(created)),
        Err(CreateFolderError::EmptyName) => {
            CreateFolderResponse::BadRequest(BasicMessage::new("Folder name cannot be empty."))
        }
        Err(CreateFolderError::ParentNotFound) => CreateFolderResponse::ParentNotFound(
            BasicMessage::new("The parent folder with the passed id could not be found."),
        ),
        Err(CreateFolderError::DbError) => CreateFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to create folder in database. Check server logs for details",
        )),
    }
}

/// renames, moves and pins/unpins a folder
#[put("/", data = "<folder>")]
pub fn update_folder(
    folder: Json<UpdateFolderRequest>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
) -> UpdateFolderResponse {
    map_update_result(service::update_folder(&folder, db))
}

#[post("/<id>/pin")]
pub fn toggle_pin(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> UpdateFolderResponse {
    map_update_result(service::toggle_pin(id, db))
}

#[delete("/<id>")]
pub fn delete_folder(id: &str, _unlocked: Unlocked, db: &State<VaultDb>) -> DeleteFolderResponse {
    match service::delete_folder(id, db) {
        Ok(()) => DeleteFolderResponse::Success(()),
        Err(DeleteFolderError::NotEmpty) => DeleteFolderResponse::FolderNotEmpty(
            BasicMessage::new("This folder contains items. Delete or move them first."),
        ),
        Err(DeleteFolderError::NotFound) => DeleteFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(DeleteFolderError::DbError) => DeleteFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to delete folder from database. Check server logs for details",
        )),
    }
}

fn map_update_result(
    result: Result<crate::model::repository::Folder, UpdateFolderError>,
) -> UpdateFolderResponse {
    match result {
        Ok(folder) => UpdateFolderResponse::Success(Json::from(folder)),
        Err(UpdateFolderError::EmptyName) => {
            UpdateFolderResponse::BadRequest(BasicMessage::new("Folder name cannot be empty."))
        }
        Err(UpdateFolderError::NotAllowed) => UpdateFolderResponse::BadRequest(BasicMessage::new(
            "Cannot move a folder into itself or one of its own sub folders.",
        )),
        Err(UpdateFolderError::NotFound) => UpdateFolderResponse::FolderNotFound(
            BasicMessage::new("The folder with the passed id could not be found."),
        ),
        Err(UpdateFolderError::ParentNotFound) => UpdateFolderResponse::ParentNotFound(
            BasicMessage::new("The parent folder with the passed id could not be found."),
        ),
        Err(UpdateFolderError::DbError) => UpdateFolderResponse::FolderDbError(BasicMessage::new(
            "Failed to update folder in database. Check server logs for details",
        )),
    }
}
