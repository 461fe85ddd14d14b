use rocket::serde::json::serde_json;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

use crate::model::repository::{DocumentMetadata, DocumentRecord};
use crate::model::top_level::{normalize_folder_ref, TOP_LEVEL_ID};

/// retrieves every document in the vault, in no particular order
pub fn get_all_documents(con: &Connection) -> Result<Vec<DocumentRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/get_all_documents.sql"
    ))?;
    let rows = pst.query_map([], map_document)?;
    rows.collect::<Result<Vec<DocumentRecord>, rusqlite::Error>>()
}

/// retrieves every document without its contents, in no particular order
pub fn get_all_document_metadata(
    con: &Connection,
) -> Result<Vec<DocumentMetadata>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/get_all_document_metadata.sql"
    ))?;
    let rows = pst.query_map([], map_metadata)?;
    rows.collect::<Result<Vec<DocumentMetadata>, rusqlite::Error>>()
}

/// retrieves the document with the passed id, or `None` if there isn't one
pub fn get_document(id: &str, con: &Connection) -> Result<Option<DocumentRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/get_document_by_id.sql"
    ))?;
    pst.query_row([id], map_document).optional()
}

/// inserts the document, or replaces the whole record if one with the same id exists.
/// The folder the document points to is not checked
pub fn save_document(doc: &DocumentRecord, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/save_document.sql"
    ))?;
    execute_document(&mut pst, doc)
}

/// inserts the document, failing if one with the same id already exists
pub fn insert_document(doc: &DocumentRecord, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/insert_document.sql"
    ))?;
    execute_document(&mut pst, doc)
}

/// deletes the document with the passed id. Deleting a document that doesn't exist is not an error
pub fn delete_document(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document/delete_document_by_id.sql"
    ))?;
    pst.execute([id])?;
    Ok(())
}

/// removes every document in the vault
pub fn delete_all_documents(con: &Connection) -> Result<(), rusqlite::Error> {
    con.execute(
        include_str!("../assets/queries/document/delete_all_documents.sql"),
        [],
    )?;
    Ok(())
}

fn execute_document(
    pst: &mut rusqlite::Statement,
    doc: &DocumentRecord,
) -> Result<(), rusqlite::Error> {
    let tags = serde_json::to_string(&doc.tags)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let size = i64::try_from(doc.size)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    pst.execute(params![
        doc.id,
        doc.name,
        doc.folder_id.as_deref().unwrap_or(TOP_LEVEL_ID),
        doc.mime_type,
        doc.data,
        doc.uploaded_at,
        size,
        doc.summary,
        tags
    ])?;
    Ok(())
}

fn map_document(row: &rusqlite::Row) -> Result<DocumentRecord, rusqlite::Error> {
    let folder_id: String = row.get(2)?;
    Ok(DocumentRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        folder_id: normalize_folder_ref(Some(folder_id.as_str())),
        mime_type: row.get(3)?,
        data: row.get(4)?,
        uploaded_at: row.get(5)?,
        size: get_size(row, 6)?,
        summary: row.get(7)?,
        tags: get_tags(row, 8)?,
    })
}

/// same columns as [`map_document`], minus `data`
fn map_metadata(row: &rusqlite::Row) -> Result<DocumentMetadata, rusqlite::Error> {
    let folder_id: String = row.get(2)?;
    Ok(DocumentMetadata {
        id: row.get(0)?,
        name: row.get(1)?,
        folder_id: normalize_folder_ref(Some(folder_id.as_str())),
        mime_type: row.get(3)?,
        uploaded_at: row.get(4)?,
        size: get_size(row, 5)?,
        summary: row.get(6)?,
        tags: get_tags(row, 7)?,
    })
}

fn get_size(row: &rusqlite::Row, idx: usize) -> Result<u64, rusqlite::Error> {
    let size: i64 = row.get(idx)?;
    Ok(u64::try_from(size).unwrap_or_default())
}

fn get_tags(row: &rusqlite::Row, idx: usize) -> Result<Vec<String>, rusqlite::Error> {
    let tags: String = row.get(idx)?;
    serde_json::from_str(&tags)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
