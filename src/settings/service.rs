use std::backtrace::Backtrace;
use std::sync::RwLock;

use sha2::{Digest, Sha256};

use crate::model::error::settings_errors::{SetPasscodeError, UpdateSettingsError};
use crate::model::request::settings_requests::SetPasscodeRequest;
use crate::repository::{metadata_repository, VaultDb};
use crate::settings::{AppSettings, Theme};
use crate::util::{read_lock, write_lock};

pub const PASSCODE_KEY: &str = "passcodeHash";
pub const THEME_KEY: &str = "theme";
const PASSCODE_LENGTH: usize = 6;

/// reads the persisted settings out of the metadata table. Missing values use their defaults
pub fn load_settings(db: &VaultDb) -> Result<AppSettings, rusqlite::Error> {
    let con = db.open_connection()?;
    let passcode_hash = metadata_repository::get_value(PASSCODE_KEY, &con)?;
    let theme = metadata_repository::get_value(THEME_KEY, &con)?
        .map(|theme| Theme::from(theme.as_str()))
        .unwrap_or_default();
    Ok(AppSettings {
        passcode_hash,
        theme,
    })
}

pub fn hash_passcode(passcode: &str) -> String {
    format!("{:x}", Sha256::digest(passcode.as_bytes()))
}

/// passcodes are exactly 6 ascii digits
pub fn is_valid_passcode(passcode: &str) -> bool {
    passcode.len() == PASSCODE_LENGTH && passcode.bytes().all(|b| b.is_ascii_digit())
}

/// returns true if `candidate` matches the stored passcode. Always false if no passcode has been set
pub fn check_passcode(settings: &AppSettings, candidate: &str) -> bool {
    match &settings.passcode_hash {
        Some(hash) => *hash == hash_passcode(candidate),
        None => false,
    }
}

/// sets the passcode for the first time, or replaces it if `current_passcode` matches the existing one
pub fn set_passcode(
    request: &SetPasscodeRequest,
    settings: &RwLock<AppSettings>,
    db: &VaultDb,
) -> Result<(), SetPasscodeError> {
    if !is_valid_passcode(&request.passcode) {
        return Err(SetPasscodeError::InvalidFormat);
    }
    {
        let current = read_lock(settings);
        if current.has_passcode() {
            let matches = request
                .current_passcode
                .as_deref()
                .is_some_and(|candidate| check_passcode(&current, candidate));
            if !matches {
                log::warn!("Rejected a passcode change with a wrong current passcode");
                return Err(SetPasscodeError::CurrentPasscodeMismatch);
            }
        }
    }
    let hash = hash_passcode(&request.passcode);
    let con = db.open_connection().map_err(|_| SetPasscodeError::DbError)?;
    if let Err(e) = metadata_repository::set_value(PASSCODE_KEY, &hash, &con) {
        log::error!(
            "Failed to save passcode! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(SetPasscodeError::DbError);
    }
    write_lock(settings).passcode_hash = Some(hash);
    Ok(())
}

pub fn set_theme(
    theme: Theme,
    settings: &RwLock<AppSettings>,
    db: &VaultDb,
) -> Result<AppSettings, UpdateSettingsError> {
    let con = db
        .open_connection()
        .map_err(|_| UpdateSettingsError::DbError)?;
    if let Err(e) = metadata_repository::set_value(THEME_KEY, theme.as_str(), &con) {
        log::error!(
            "Failed to save theme! Error is {e:?}\n{}",
            Backtrace::force_capture()
        );
        return Err(UpdateSettingsError::DbError);
    }
    let mut current = write_lock(settings);
    current.theme = theme;
    Ok(current.clone())
}
