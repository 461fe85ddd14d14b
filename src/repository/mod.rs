use std::backtrace::Backtrace;
use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags, Result};

pub mod metadata_repository;

/// how long a connection waits on a write lock held by another request before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// points at the sqlite file that backs the vault. Every operation opens its own connection through this,
/// so sqlite is the only thing that has to serialize concurrent writes
#[derive(Debug, Clone)]
pub struct VaultDb {
    location: PathBuf,
}

impl VaultDb {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// opens a new connection to the vault database. Callers own the connection and drop it when done
    pub fn open_connection(&self) -> Result<Connection> {
        let opened = Connection::open_with_flags(&self.location, OpenFlags::default())
            .and_then(|con| con.busy_timeout(BUSY_TIMEOUT).map(|_| con));
        if let Err(e) = &opened {
            log::error!(
                "Failed to open a connection to {}! Error is {e:?}\n{}",
                self.location.display(),
                Backtrace::force_capture()
            );
        }
        opened
    }

    /// creates the vault tables if they don't exist yet. Safe to call on every startup
    pub fn initialize(&self) -> Result<()> {
        let con = self.open_connection()?;
        create_db(&con)?;
        let version = metadata_repository::get_version(&con)?;
        log::info!(
            "Vault database at {} is on version {version}",
            self.location.display()
        );
        Ok(())
    }
}

/// runs init.sql on the database
fn create_db(con: &Connection) -> Result<()> {
    con.execute_batch(include_str!("../assets/init.sql"))
}

#[cfg(test)]
mod vault_db_tests {
    use crate::repository::metadata_repository;
    use crate::test::TestVault;

    #[test]
    fn initialize_is_repeatable() {
        let vault = TestVault::new();
        vault.db.initialize().unwrap();
        vault.db.initialize().unwrap();
        let con = vault.db.open_connection().unwrap();
        assert_eq!("2", metadata_repository::get_version(&con).unwrap());
    }
}
