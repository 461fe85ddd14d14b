use serde::{Deserialize, Serialize};

use crate::model::top_level;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    pub name: String,
    /// missing, `null`, `"root"` and `"All"` all create the folder at the top level
    #[serde(default, with = "top_level::parent_folder")]
    pub parent_id: Option<String>,
}

/// replaces the folder's name, parent and pin state in one go
#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    pub id: String,
    pub name: String,
    #[serde(default, with = "top_level::parent_folder")]
    pub parent_id: Option<String>,
    pub is_pinned: bool,
}
