use std::backtrace::Backtrace;

use rusqlite::{Connection, TransactionBehavior};

use crate::documents::repository as document_repository;
use crate::folders::repository as folder_repository;
use crate::folders::tree::{sort_documents, FolderTree};
use crate::model::error::folder_errors::{
    CreateFolderError, DeleteFolderError, GetFolderError, GetVaultViewError, UpdateFolderError,
};
use crate::model::repository::{DocumentMetadata, Folder};
use crate::model::request::folder_requests::{CreateFolderRequest, UpdateFolderRequest};
use crate::model::response::folder_responses::{FolderSummary, VaultViewResponse};
use crate::repository::VaultDb;
use crate::util::{new_id, now_millis};

pub fn get_folder(id: &str, db: &VaultDb) -> Result<Folder, GetFolderError> {
    let con = db.open_connection().map_err(|_| GetFolderError::DbError)?;
    match folder_repository::get_folder(id, &con) {
        Ok(Some(folder)) => Ok(folder),
        Ok(None) => Err(GetFolderError::NotFound),
        Err(e) => {
            log::error!(
                "Failed to pull folder {id} from the database! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            Err(GetFolderError::DbError)
        }
    }
}

pub fn create_folder(request: &CreateFolderRequest, db: &VaultDb) -> Result<Folder, CreateFolderError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(CreateFolderError::EmptyName);
    }
    let con = db.open_connection().map_err(|_| CreateFolderError::DbError)?;
    if let Some(parent_id) = &request.parent_id {
        match folder_repository::get_folder(parent_id, &con) {
            Ok(Some(_)) => { /* no op */ }
            Ok(None) => return Err(CreateFolderError::ParentNotFound),
            Err(e) => {
                log::error!(
                    "Failed to check if parent folder {parent_id} exists! Error is {e:?}\n{}",
                    Backtrace::force_capture()
                );
                return Err(CreateFolderError::DbError);
            }
        }
    }
    let folder = Folder {
        id: new_id(),
        name: name.to_string(),
        parent_id: request.parent_id.clone(),
        icon: None,
        is_pinned: false,
        created_at: Some(now_millis()),
    };
    if let Err(e) = folder_repository::save_folder(&folder, &con) {
        log::error!(
            "Failed to create folder {}! Error is {e:?}\n{}",
            folder.name,
            Backtrace::force_capture()
        );
        return Err(CreateFolderError::DbError);
    }
    Ok(folder)
}

/// replaces the folder's name, parent and pin state.
///
/// All validation (blank name, unknown folder, moving the folder under itself or one of its descendants) happens
/// before anything is written. The parent is only validated when it actually changes, so folders whose parent went
/// missing can still be renamed or pinned
pub fn update_folder(request: &UpdateFolderRequest, db: &VaultDb) -> Result<Folder, UpdateFolderError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(UpdateFolderError::EmptyName);
    }
    modify_folder(&request.id, db, |existing| Folder {
        name: name.to_string(),
        parent_id: request.parent_id.clone(),
        is_pinned: request.is_pinned,
        ..existing.clone()
    })
}

/// flips whether the folder is pinned
pub fn toggle_pin(id: &str, db: &VaultDb) -> Result<Folder, UpdateFolderError> {
    modify_folder(id, db, |existing| Folder {
        is_pinned: !existing.is_pinned,
        ..existing.clone()
    })
}

/// reads, validates and saves a folder inside one immediate transaction
fn modify_folder<F>(id: &str, db: &VaultDb, change: F) -> Result<Folder, UpdateFolderError>
where
    F: FnOnce(&Folder) -> Folder,
{
    let mut con = db.open_connection().map_err(|_| UpdateFolderError::DbError)?;
    let tx = con
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| {
            log::error!(
                "Failed to start transaction to update folder {id}! Error is {e:?}\n{}",
                Backtrace::force_capture()
            );
            UpdateFolderError::DbError
        })?;
    let folders = folder_repository::get_all_folders(&tx).map_err(|e| {
        log::error!(
            "Failed to pull folders to update folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        UpdateFolderError::DbError
    })?;
    let tree = FolderTree::new(&folders, &[]);
    let existing = tree.find(id).ok_or(UpdateFolderError::NotFound)?;
    let updated = change(existing);
    if updated.parent_id != existing.parent_id {
        tree.validate_move(id, updated.parent_id.as_deref())?;
    }
    let saved = folder_repository::save_folder(&updated, &tx).and_then(|_| tx.commit());
    if let Err(e) = saved {
        log::error!(
            "Failed to update folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(UpdateFolderError::DbError);
    }
    Ok(updated)
}

/// deletes a folder, but only if it has no child folders and no documents directly inside it
pub fn delete_folder(id: &str, db: &VaultDb) -> Result<(), DeleteFolderError> {
    let con = db.open_connection().map_err(|_| DeleteFolderError::DbError)?;
    let (folders, documents) = load_vault(&con).map_err(|_| DeleteFolderError::DbError)?;
    let tree = FolderTree::new(&folders, &documents);
    if tree.find(id).is_none() {
        return Err(DeleteFolderError::NotFound);
    }
    tree.validate_delete(id)?;
    folder_repository::delete_folder(id, &con).map_err(|e| {
        log::error!(
            "Failed to delete folder {id}! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        DeleteFolderError::DbError
    })
}

/// builds everything a client needs to show the contents of `active` (`None` being the top level), optionally
/// narrowed down by a search over document names
pub fn get_vault_view(
    active: Option<&str>,
    search: Option<&str>,
    db: &VaultDb,
) -> Result<VaultViewResponse, GetVaultViewError> {
    let con = db.open_connection().map_err(|_| GetVaultViewError::DbError)?;
    let (folders, mut documents) = load_vault(&con).map_err(|_| GetVaultViewError::DbError)?;
    sort_documents(&mut documents);
    let tree = FolderTree::new(&folders, &documents);
    if let Some(id) = active {
        if tree.find(id).is_none() {
            return Err(GetVaultViewError::FolderNotFound);
        }
    }
    let groups = tree.grouped_children(active, search);
    let summarize = |folder: &Folder| FolderSummary {
        folder: folder.clone(),
        item_count: tree.item_count(&folder.id),
    };
    Ok(VaultViewResponse {
        breadcrumbs: tree.breadcrumbs(active),
        pinned: groups.pinned.into_iter().map(summarize).collect(),
        others: groups.others.into_iter().map(summarize).collect(),
        documents: tree
            .filter_documents(active, search)
            .into_iter()
            .cloned()
            .collect(),
    })
}

fn load_vault(con: &Connection) -> Result<(Vec<Folder>, Vec<DocumentMetadata>), rusqlite::Error> {
    let loaded = folder_repository::get_all_folders(con).and_then(|folders| {
        document_repository::get_all_document_metadata(con).map(|documents| (folders, documents))
    });
    if let Err(e) = &loaded {
        log::error!(
            "Failed to load the vault from the database! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
    }
    loaded
}
