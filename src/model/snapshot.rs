use serde::{Deserialize, Serialize};

use super::repository::{DocumentRecord, Folder};

/// the version written into every exported snapshot. Snapshots with a higher version are refused on import
pub const SNAPSHOT_VERSION: u32 = 2;

/// a complete copy of the vault, used for backup files
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// missing in some hand-made backups, in which case it is treated as 0
    #[serde(default)]
    pub version: u32,
    /// epoch millis of when the snapshot was taken
    #[serde(default)]
    pub timestamp: i64,
    pub folders: Vec<Folder>,
    pub documents: Vec<DocumentRecord>,
}
