use rocket::http::Status;

use crate::model::snapshot::Snapshot;
use crate::test::*;

#[test]
fn export_vault_download() {
    let vault = TestVault::locked();
    vault.create_folder("math", "Math", None);
    vault.create_document("1", "Algebra.pdf", Some("math"), 100);
    let client = vault.client();
    let res = client
        .get(uri!("/vault/export"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let disposition = res.headers().get_one("Content-Disposition").unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"eduvault-backup-"));
    assert!(disposition.ends_with(".json\""));
    let snapshot: Snapshot = res.into_json().unwrap();
    assert_eq!(1, snapshot.folders.len());
    assert_eq!(1, snapshot.documents.len());
}

#[test]
fn export_vault_requires_passcode() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = client.get(uri!("/vault/export")).dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn import_vault_replaces_contents() {
    let vault = TestVault::locked();
    vault.create_folder("old", "Old", None);
    let client = vault.client();
    let res = client
        .post(uri!("/vault/import"))
        .header(passcode_header())
        .body(r#"{"version":2,"folders":[{"id":"new","name":"New","parentId":null}],"documents":[]}"#)
        .dispatch();
    assert_eq!(Status::NoContent, res.status());
    let folders = vault.all_folders();
    assert_eq!(1, folders.len());
    assert_eq!("new", folders[0].id);
}

#[test]
fn import_vault_bad_file() {
    let vault = TestVault::locked();
    vault.create_folder("old", "Old", None);
    let client = vault.client();
    let res = client
        .post(uri!("/vault/import"))
        .header(passcode_header())
        .body(r#"{"folders":[]}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
    assert_eq!(1, vault.all_folders().len());
}
