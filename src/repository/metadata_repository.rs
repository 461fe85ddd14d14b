use rusqlite::{Connection, OptionalExtension};

const VERSION_KEY: &str = "version";

/// returns the current version of the database as a String
pub fn get_version(con: &Connection) -> Result<String, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/metadata/get_value.sql"),
        [VERSION_KEY],
        |row| row.get(0),
    )
}

/// retrieves a single value from the metadata table, or `None` if it was never set
pub fn get_value(name: &str, con: &Connection) -> Result<Option<String>, rusqlite::Error> {
    con.query_row(
        include_str!("../assets/queries/metadata/get_value.sql"),
        [name],
        |row| row.get(0),
    )
    .optional()
}

/// sets (or replaces) a value in the metadata table
pub fn set_value(name: &str, value: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/metadata/set_value.sql"))?;
    pst.execute([name, value])?;
    Ok(())
}
