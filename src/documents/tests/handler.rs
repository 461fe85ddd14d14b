use rocket::http::{ContentType, Status};
use rocket::local::blocking::Client;

use crate::model::repository::{DocumentMetadata, DocumentRecord};
use crate::test::*;

const BOUNDARY: &str = "X-VAULT-BOUNDARY";

fn multipart_type() -> ContentType {
    ContentType::parse_flexible(&format!("multipart/form-data; boundary={BOUNDARY}")).unwrap()
}

fn upload_body(file_name: &str, mime_type: &str, contents: &str, folder_id: Option<&str>) -> String {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {mime_type}\r\n\r\n{contents}\r\n"
    );
    if let Some(folder_id) = folder_id {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"folderId\"\r\n\r\n{folder_id}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn upload(client: &Client, body: String) -> rocket::local::blocking::LocalResponse<'_> {
    client
        .post(uri!("/documents"))
        .header(passcode_header())
        .header(multipart_type())
        .body(body)
        .dispatch()
}

#[test]
fn upload_document_without_passcode() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = client
        .post(uri!("/documents"))
        .header(multipart_type())
        .body(upload_body("notes.txt", "text/plain", "hello", None))
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
    assert!(vault.all_documents().is_empty());
}

#[test]
fn upload_document_success() {
    let vault = TestVault::locked();
    vault.create_folder("math", "Math", None);
    let client = vault.client();
    let res = upload(
        &client,
        upload_body("notes.txt", "text/plain", "hello", Some("math")),
    );
    assert_eq!(Status::Created, res.status());
    let created: DocumentMetadata = res.into_json().unwrap();
    assert_eq!("notes.txt", created.name);
    assert_eq!("text/plain", created.mime_type);
    assert_eq!(Some("math".to_string()), created.folder_id);
    assert_eq!(5, created.size);
    let stored = vault.all_documents();
    assert_eq!(1, stored.len());
    assert_eq!("data:text/plain;base64,aGVsbG8=", stored[0].data);
}

#[test]
fn upload_document_unknown_folder() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = upload(
        &client,
        upload_body("notes.txt", "text/plain", "hello", Some("missing")),
    );
    assert_eq!(Status::NotFound, res.status());
    assert!(vault.all_documents().is_empty());
}

#[test]
fn list_documents_leaves_out_contents() {
    let vault = TestVault::locked();
    vault.create_document("1", "Algebra.pdf", None, 100);
    vault.create_document("2", "Biology.jpg", None, 200);
    let client = vault.client();
    let res = client
        .get(uri!("/documents"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(!body.contains("\"data\""));
    assert!(body.contains(r#""folderId":"root""#));
    let listed: Vec<DocumentMetadata> = rocket::serde::json::serde_json::from_str(&body).unwrap();
    let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(vec!["Biology.jpg", "Algebra.pdf"], names);
}

#[test]
fn get_document_full_record() {
    let vault = TestVault::locked();
    let expected = vault.create_document("1", "Algebra.pdf", None, 100);
    let client = vault.client();
    let res = client
        .get(uri!("/documents/1"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(expected, res.into_json::<DocumentRecord>().unwrap());
}

#[test]
fn download_document_content() {
    let vault = TestVault::locked();
    vault.create_document("1", "notes.txt", None, 100);
    let client = vault.client();
    let res = client
        .get(uri!("/documents/1/content"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(Some(ContentType::Plain), res.content_type());
    assert_eq!("contents of notes.txt", res.into_string().unwrap());
}

#[test]
fn update_document_success() {
    let vault = TestVault::locked();
    vault.create_document("1", "notes.txt", None, 100);
    let client = vault.client();
    let res = client
        .put(uri!("/documents"))
        .header(passcode_header())
        .header(ContentType::JSON)
        .body(r#"{"id":"1","name":"renamed.txt","folderId":"All","tags":["a"]}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let stored = vault.all_documents().remove(0);
    assert_eq!("renamed.txt", stored.name);
    assert_eq!(None, stored.folder_id);
    assert_eq!(vec!["a".to_string()], stored.tags);
}

#[test]
fn delete_document_not_found() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = client
        .delete(uri!("/documents/1"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn delete_document_success() {
    let vault = TestVault::locked();
    vault.create_document("1", "notes.txt", None, 100);
    let client = vault.client();
    let res = client
        .delete(uri!("/documents/1"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::NoContent, res.status());
    assert!(vault.all_documents().is_empty());
}
