#[derive(PartialEq, Debug)]
pub enum ExportError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum ImportError {
    /// the file is not valid json, or a record in it doesn't have the right shape
    Malformed(String),
    /// the file is json, but is missing either the `folders` or the `documents` collection
    MissingCollections,
    /// the snapshot was made by a newer version of the vault
    UnsupportedVersion(u32),
    /// the restore transaction failed and was rolled back
    DbError,
}
