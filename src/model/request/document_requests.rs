use rocket::fs::TempFile;
use rocket::FromForm;
use serde::{Deserialize, Serialize};

use crate::model::top_level;

#[derive(FromForm)]
pub struct DocumentUpload<'a> {
    pub file: TempFile<'a>,
    /// the folder to upload into. Leaving it out uploads to the top level
    #[field(name = "folderId")]
    pub folder_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDocumentRequest {
    pub id: String,
    pub name: String,
    #[serde(default, with = "top_level::document_folder")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}
