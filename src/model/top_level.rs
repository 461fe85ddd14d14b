//! The top level of the vault has no folder record of its own.
//!
//! Documents stored there are always written with [`TOP_LEVEL_ID`] as their `folderId`, and folders stored there
//! have a `null` `parentId`. Older clients also used `"All"` to mean the same thing, so every read path accepts both
//! spellings (as well as `null` and the empty string) and normalizes them to `None`.

/// the one canonical spelling of "no folder" that gets persisted and sent to clients
pub const TOP_LEVEL_ID: &str = "root";
/// display name of the top level in breadcrumbs
pub const TOP_LEVEL_NAME: &str = "Home";
const LEGACY_TOP_LEVEL_ID: &str = "All";

/// returns true if `value` is any of the spellings used for the top level
pub fn is_top_level(value: &str) -> bool {
    value.is_empty() || value == TOP_LEVEL_ID || value == LEGACY_TOP_LEVEL_ID
}

/// converts a folder reference coming from a client or a snapshot into the in-memory representation,
/// where `None` is the top level
pub fn normalize_folder_ref(value: Option<&str>) -> Option<String> {
    match value {
        Some(id) if !is_top_level(id) => Some(id.to_string()),
        _ => None,
    }
}

/// serde adapter for a document's `folderId`: writes the sentinel for the top level, reads any spelling
pub mod document_folder {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(super::TOP_LEVEL_ID))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(super::normalize_folder_ref(raw.as_deref()))
    }
}

/// serde adapter for a folder's `parentId`: writes `null` for the top level, reads any spelling
pub mod parent_folder {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => serializer.serialize_some(id),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(super::normalize_folder_ref(raw.as_deref()))
    }
}
