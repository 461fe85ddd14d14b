#[derive(PartialEq, Debug)]
pub enum GetFolderError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateFolderError {
    /// the name was empty after trimming
    EmptyName,
    /// the requested parent folder does not exist
    ParentNotFound,
    /// the database failed to save the folder
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateFolderError {
    /// the folder could not be found
    NotFound,
    /// the new name was empty after trimming
    EmptyName,
    /// the requested parent folder does not exist
    ParentNotFound,
    /// the user attempted to move a folder into itself or one of its own descendants
    NotAllowed,
    /// the database failed to update the folder
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteFolderError {
    /// folder not in the vault
    NotFound,
    /// the folder still has child folders or documents in it
    NotEmpty,
    /// database could not execute the query
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetVaultViewError {
    /// the folder being viewed does not exist
    FolderNotFound,
    DbError,
}
