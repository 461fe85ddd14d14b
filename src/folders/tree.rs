//! Read-only projections over the flat folder and document lists pulled from the vault.
//!
//! Nothing in here touches the database; the service layer loads both lists and hands them to a [`FolderTree`].
//! Every walk up the `parentId` chain tracks the ids it has already seen, so a cycle that made it into the
//! database (e.g. through an old backup) can never hang a request.

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::error::folder_errors::{DeleteFolderError, UpdateFolderError};
use crate::model::repository::{DocumentMetadata, Folder};
use crate::model::top_level::{TOP_LEVEL_ID, TOP_LEVEL_NAME};

/// one step in the path from the top level to a folder
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
}

impl Breadcrumb {
    pub fn top_level() -> Self {
        Self {
            id: TOP_LEVEL_ID.to_string(),
            name: TOP_LEVEL_NAME.to_string(),
        }
    }
}

impl From<&Folder> for Breadcrumb {
    fn from(value: &Folder) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
        }
    }
}

/// the direct children of a folder, split by pin state. Relative order from the source list is kept
#[derive(Debug, PartialEq, Default)]
pub struct FolderGroups<'a> {
    pub pinned: Vec<&'a Folder>,
    pub others: Vec<&'a Folder>,
}

pub struct FolderTree<'a> {
    folders: &'a [Folder],
    documents: &'a [DocumentMetadata],
}

/// a search only counts as active if there's something to search for
fn active_search(search: Option<&str>) -> Option<&str> {
    search.filter(|query| !query.is_empty())
}

/// sorts documents newest upload first, which is the default order of every listing
pub fn sort_documents(documents: &mut [DocumentMetadata]) {
    documents.sort_by_key(|doc| Reverse(doc.uploaded_at));
}

impl<'a> FolderTree<'a> {
    pub fn new(folders: &'a [Folder], documents: &'a [DocumentMetadata]) -> Self {
        Self { folders, documents }
    }

    pub fn find(&self, id: &str) -> Option<&'a Folder> {
        self.folders.iter().find(|folder| folder.id == id)
    }

    /// the folders whose parent is `parent` (`None` being the top level)
    pub fn children(&self, parent: Option<&str>) -> Vec<&'a Folder> {
        self.folders
            .iter()
            .filter(|folder| folder.parent_id.as_deref() == parent)
            .collect()
    }

    /// the documents that live directly inside `folder` (`None` being the top level)
    pub fn documents_in(&self, folder: Option<&str>) -> Vec<&'a DocumentMetadata> {
        self.documents
            .iter()
            .filter(|doc| doc.folder_id.as_deref() == folder)
            .collect()
    }

    /// builds the path from the top level down to `target`.
    ///
    /// The first entry is always the top level and, if `target` exists, the last entry is `target` itself.
    /// A target that can't be found only yields the top level entry. If the parent chain is broken (missing parent)
    /// or loops back on itself, the path stops at the last folder that could be reached
    pub fn breadcrumbs(&self, target: Option<&str>) -> Vec<Breadcrumb> {
        let mut path: Vec<Breadcrumb> = Vec::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = target;
        while let Some(id) = current {
            if !visited.insert(id) {
                log::warn!("Folder {id} is its own ancestor, stopping breadcrumb walk");
                break;
            }
            match self.find(id) {
                Some(folder) => {
                    path.push(Breadcrumb::from(folder));
                    current = folder.parent_id.as_deref();
                }
                None => break,
            }
        }
        path.push(Breadcrumb::top_level());
        path.reverse();
        path
    }

    /// splits the direct children of `active` into pinned and unpinned folders.
    /// While searching, folders aren't listed at all since the search flattens the whole vault into documents
    pub fn grouped_children(&self, active: Option<&str>, search: Option<&str>) -> FolderGroups<'a> {
        if active_search(search).is_some() {
            return FolderGroups::default();
        }
        let (pinned, others): (Vec<&'a Folder>, Vec<&'a Folder>) = self
            .children(active)
            .into_iter()
            .partition(|folder| folder.is_pinned);
        FolderGroups { pinned, others }
    }

    /// the documents to show for the current view.
    ///
    /// With a search, every document whose name contains the query (ignoring case) matches, no matter which folder
    /// it's in. Without one, only the documents directly in `active` match
    pub fn filter_documents(&self, active: Option<&str>, search: Option<&str>) -> Vec<&'a DocumentMetadata> {
        match active_search(search) {
            Some(query) => {
                let query = query.to_lowercase();
                self.documents
                    .iter()
                    .filter(|doc| doc.name.to_lowercase().contains(&query))
                    .collect()
            }
            None => self.documents_in(active),
        }
    }

    /// number of child folders plus documents directly inside the folder. Grandchildren are not counted
    pub fn item_count(&self, folder_id: &str) -> usize {
        let folders = self
            .folders
            .iter()
            .filter(|folder| folder.parent_id.as_deref() == Some(folder_id))
            .count();
        let documents = self
            .documents
            .iter()
            .filter(|doc| doc.folder_id.as_deref() == Some(folder_id))
            .count();
        folders + documents
    }

    /// returns true if `ancestor_id` appears anywhere above `folder_id` in the tree
    pub fn is_ancestor(&self, ancestor_id: &str, folder_id: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = self.find(folder_id).and_then(|f| f.parent_id.as_deref());
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            if !visited.insert(id) {
                return false;
            }
            current = self.find(id).and_then(|f| f.parent_id.as_deref());
        }
        false
    }

    /// checks that `folder_id` can be moved under `new_parent` without breaking the tree.
    ///
    /// A folder can't become its own parent or the child of one of its own descendants, and the new parent must exist
    pub fn validate_move(&self, folder_id: &str, new_parent: Option<&str>) -> Result<(), UpdateFolderError> {
        let Some(parent_id) = new_parent else {
            return Ok(());
        };
        if parent_id == folder_id {
            return Err(UpdateFolderError::NotAllowed);
        }
        if self.find(parent_id).is_none() {
            return Err(UpdateFolderError::ParentNotFound);
        }
        if self.is_ancestor(folder_id, parent_id) {
            return Err(UpdateFolderError::NotAllowed);
        }
        Ok(())
    }

    /// a folder can only be deleted once nothing is directly inside it
    pub fn validate_delete(&self, folder_id: &str) -> Result<(), DeleteFolderError> {
        if self.item_count(folder_id) > 0 {
            Err(DeleteFolderError::NotEmpty)
        } else {
            Ok(())
        }
    }
}
