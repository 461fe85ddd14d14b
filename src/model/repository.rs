use serde::{Deserialize, Serialize};

use super::top_level;

/// a folder in the vault. Folders form a tree through [`Folder::parent_id`]
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    /// display name, never blank
    pub name: String,
    /// `None` if this folder lives at the top level
    #[serde(default, with = "top_level::parent_folder")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// only affects how the folder is grouped for display
    #[serde(default)]
    pub is_pinned: bool,
    /// epoch millis. Older snapshots may not have this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// an uploaded file, stored in full inside the vault
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    /// the original file name
    pub name: String,
    /// `None` if the document lives at the top level
    #[serde(default, with = "top_level::document_folder")]
    pub folder_id: Option<String>,
    /// mime type of the file
    #[serde(rename = "type")]
    pub mime_type: String,
    /// the file contents as a data uri, see [`crate::documents::data_uri`]
    pub data: String,
    /// epoch millis, used as the default sort key
    pub uploaded_at: i64,
    /// size of the original file in bytes
    pub size: u64,
    /// the last summary generated for this document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// a document without its contents. Listings, the vault view and chat only ever need this much
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub id: String,
    pub name: String,
    #[serde(with = "top_level::document_folder")]
    pub folder_id: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub uploaded_at: i64,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

impl From<&DocumentRecord> for DocumentMetadata {
    fn from(value: &DocumentRecord) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
            folder_id: value.folder_id.clone(),
            mime_type: value.mime_type.clone(),
            uploaded_at: value.uploaded_at,
            size: value.size,
            summary: value.summary.clone(),
            tags: value.tags.clone(),
        }
    }
}
