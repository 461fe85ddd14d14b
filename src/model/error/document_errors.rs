#[derive(PartialEq, Debug)]
pub enum GetDocumentError {
    NotFound,
    DbError,
    /// the stored data uri could not be decoded
    InvalidData,
}

#[derive(PartialEq, Debug)]
pub enum CreateDocumentError {
    /// the file name was blank
    EmptyName,
    /// the requested folder does not exist
    FolderNotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateDocumentError {
    NotFound,
    /// the new name was blank
    EmptyName,
    /// the requested folder does not exist
    FolderNotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteDocumentError {
    /// document not in the vault
    NotFound,
    DbError,
}
