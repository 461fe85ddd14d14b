use rocket::http::{ContentType, Status};

use crate::documents::data_uri;
use crate::model::repository::DocumentRecord;
use crate::previews::{PageCount, PageMatches};
use crate::test::*;

fn save_png(vault: &TestVault) {
    vault.save_document(&DocumentRecord {
        data: data_uri::encode("image/png", &tiny_png()),
        ..document("1", "board.png", None, 1)
    });
}

#[test]
fn get_page_count_image() {
    let vault = TestVault::locked();
    save_png(&vault);
    let client = vault.client();
    let res = client
        .get(uri!("/documents/1/pages"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(PageCount { page_count: 1 }, res.into_json().unwrap());
}

#[test]
fn get_page_count_pdf() {
    let vault = TestVault::locked();
    vault.save_document(&pdf_document("1", "Notes.pdf", &["one", "two"]));
    let client = vault.client();
    let res = client
        .get(uri!("/documents/1/pages"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(PageCount { page_count: 2 }, res.into_json().unwrap());
}

#[test]
fn get_page_count_text_unsupported() {
    let vault = TestVault::locked();
    vault.create_document("1", "notes.txt", None, 1);
    let client = vault.client();
    let res = client
        .get(uri!("/documents/1/pages"))
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::UnsupportedMediaType, res.status());
}

#[test]
fn get_page_pdf_unsupported() {
    let vault = TestVault::locked();
    vault.save_document(&pdf_document("1", "Notes.pdf", &["one"]));
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/1")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::UnsupportedMediaType, res.status());
}

#[test]
fn search_pages_ignores_case() {
    let vault = TestVault::locked();
    vault.save_document(&pdf_document(
        "1",
        "Biology.pdf",
        &["Mitochondria", "Ribosomes", "mitochondria again"],
    ));
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/search?text=MITOCHONDRIA")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(PageMatches { pages: vec![1, 3] }, res.into_json().unwrap());
}

#[test]
fn search_pages_blank_query() {
    let vault = TestVault::locked();
    vault.save_document(&pdf_document("1", "Biology.pdf", &["Mitochondria"]));
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/search?text=%20")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(PageMatches { pages: vec![] }, res.into_json().unwrap());
}

#[test]
fn search_pages_missing_document() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/search?text=cell")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn get_page_png() {
    let vault = TestVault::locked();
    save_png(&vault);
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/1?scale=2")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(Some(ContentType::PNG), res.content_type());
    let bytes = res.into_bytes().unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(4, decoded.width());
    assert_eq!(2, decoded.height());
}

#[test]
fn get_page_out_of_range() {
    let vault = TestVault::locked();
    save_png(&vault);
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/3")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
}

#[test]
fn get_page_missing_document() {
    let vault = TestVault::locked();
    let client = vault.client();
    let res = client
        .get("/documents/1/pages/1")
        .header(passcode_header())
        .dispatch();
    assert_eq!(Status::NotFound, res.status());
}
