use chrono::NaiveDate;

use crate::backup::service::*;
use crate::model::error::backup_errors::ImportError;
use crate::model::repository::Folder;
use crate::model::snapshot::{Snapshot, SNAPSHOT_VERSION};
use crate::test::{document, folder, TestVault};

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

fn folder_ids(folders: &[Folder]) -> Vec<String> {
    sorted(folders.iter().map(|f| f.id.clone()).collect())
}

fn fill(vault: &TestVault) {
    vault.create_folder("math", "Math", None);
    vault.create_folder("algebra", "Algebra", Some("math"));
    vault.create_document("1", "Algebra.pdf", Some("algebra"), 100);
    vault.create_document("2", "Biology.jpg", None, 200);
}

#[test]
fn export_file_name_uses_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!("eduvault-backup-2024-03-07.json", export_file_name(date));
}

#[test]
fn export_then_restore_reproduces_vault() {
    let source = TestVault::new();
    fill(&source);
    let snapshot = export_snapshot(&source.db).unwrap();
    assert_eq!(SNAPSHOT_VERSION, snapshot.version);
    let raw = rocket::serde::json::serde_json::to_string(&snapshot).unwrap();

    let target = TestVault::new();
    target.create_folder("stale", "Stale", None);
    import_snapshot(&raw, &target.db).unwrap();

    let mut expected_folders = source.all_folders();
    let mut actual_folders = target.all_folders();
    expected_folders.sort_by(|a, b| a.id.cmp(&b.id));
    actual_folders.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(expected_folders, actual_folders);

    let mut expected_documents = source.all_documents();
    let mut actual_documents = target.all_documents();
    expected_documents.sort_by(|a, b| a.id.cmp(&b.id));
    actual_documents.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(expected_documents, actual_documents);
}

#[test]
fn import_missing_documents_leaves_vault_unchanged() {
    let vault = TestVault::new();
    fill(&vault);
    let before = folder_ids(&vault.all_folders());
    let res = import_snapshot(r#"{"version":2,"folders":[]}"#, &vault.db);
    assert_eq!(Err(ImportError::MissingCollections), res.map(|_| ()));
    assert_eq!(before, folder_ids(&vault.all_folders()));
    assert_eq!(2, vault.all_documents().len());
}

#[test]
fn import_collections_must_be_arrays() {
    let res = parse_snapshot(r#"{"folders":{},"documents":[]}"#);
    assert_eq!(Err(ImportError::MissingCollections), res);
}

#[test]
fn import_not_json() {
    let res = parse_snapshot("definitely not json");
    assert!(matches!(res, Err(ImportError::Malformed(_))));
}

#[test]
fn import_newer_version() {
    let res = parse_snapshot(r#"{"version":99,"folders":[],"documents":[]}"#);
    assert_eq!(Err(ImportError::UnsupportedVersion(99)), res);
}

#[test]
fn import_normalizes_legacy_top_level() {
    let vault = TestVault::new();
    let raw = r#"{
        "version": 1,
        "folders": [{"id": "math", "name": "Math", "parentId": "All"}],
        "documents": [{
            "id": "1", "name": "notes.txt", "folderId": "All", "type": "text/plain",
            "data": "data:text/plain;base64,aGk=", "uploadedAt": 5, "size": 2
        }]
    }"#;
    import_snapshot(raw, &vault.db).unwrap();
    assert_eq!(None, vault.all_folders()[0].parent_id);
    let doc = vault.all_documents().remove(0);
    assert_eq!(None, doc.folder_id);
    assert!(doc.tags.is_empty());
}

#[test]
fn duplicate_ids_roll_back_restore() {
    let vault = TestVault::new();
    fill(&vault);
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        timestamp: 0,
        folders: vec![folder("dup", "One", None), folder("dup", "Two", None)],
        documents: vec![document("9", "new.txt", None, 1)],
    };
    assert_eq!(Err(ImportError::DbError), restore_snapshot(&snapshot, &vault.db));
    assert_eq!(
        vec!["algebra".to_string(), "math".to_string()],
        folder_ids(&vault.all_folders())
    );
    assert_eq!(2, vault.all_documents().len());
}
