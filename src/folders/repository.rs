use rusqlite::{params, Connection, OptionalExtension};

use crate::model::repository::Folder;
use crate::model::top_level::normalize_folder_ref;

/// retrieves every folder in the vault, in no particular order
pub fn get_all_folders(con: &Connection) -> Result<Vec<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_all_folders.sql"
    ))?;
    let rows = pst.query_map([], map_folder)?;
    rows.collect::<Result<Vec<Folder>, rusqlite::Error>>()
}

/// retrieves the folder with the passed id, or `None` if there isn't one
pub fn get_folder(id: &str, con: &Connection) -> Result<Option<Folder>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/get_folder_by_id.sql"
    ))?;
    pst.query_row([id], map_folder).optional()
}

/// inserts the folder, or replaces the whole record if one with the same id exists.
/// This does not check that the parent folder exists; that must be done before this function is called
pub fn save_folder(folder: &Folder, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/folder/save_folder.sql"))?;
    pst.execute(params![
        folder.id,
        folder.name,
        folder.parent_id,
        folder.icon,
        folder.is_pinned,
        folder.created_at
    ])?;
    Ok(())
}

/// inserts the folder, failing if one with the same id already exists
pub fn insert_folder(folder: &Folder, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/insert_folder.sql"
    ))?;
    pst.execute(params![
        folder.id,
        folder.name,
        folder.parent_id,
        folder.icon,
        folder.is_pinned,
        folder.created_at
    ])?;
    Ok(())
}

/// deletes the folder with the passed id. Deleting a folder that doesn't exist is not an error.
/// This _does not_ check for child folders or documents
pub fn delete_folder(id: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/folder/delete_folder_by_id.sql"
    ))?;
    pst.execute([id])?;
    Ok(())
}

/// removes every folder in the vault
pub fn delete_all_folders(con: &Connection) -> Result<(), rusqlite::Error> {
    con.execute(
        include_str!("../assets/queries/folder/delete_all_folders.sql"),
        [],
    )?;
    Ok(())
}

fn map_folder(row: &rusqlite::Row) -> Result<Folder, rusqlite::Error> {
    Ok(Folder {
        id: row.get(0)?,
        name: row.get(1)?,
        parent_id: normalize_folder_ref(row.get::<_, Option<String>>(2)?.as_deref()),
        icon: row.get(3)?,
        is_pinned: row.get(4)?,
        created_at: row.get(5)?,
    })
}
