use std::sync::RwLock;

use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;

use crate::guard::Unlocked;
use crate::model::error::settings_errors::{SetPasscodeError, UpdateSettingsError};
use crate::model::request::settings_requests::{SetPasscodeRequest, UpdateThemeRequest};
use crate::model::response::settings_responses::{
    SetPasscodeResponse, SettingsResponse, UpdateThemeResponse,
};
use crate::model::response::BasicMessage;
use crate::repository::VaultDb;
use crate::settings::{service, AppSettings};
use crate::util::read_lock;

static API_VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
pub struct ApiVersion {
    version: &'static str,
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion {
        version: API_VERSION_NUMBER,
    })
}

/// readable without a passcode so clients know whether to show the lock screen or the first time setup
#[get("/settings")]
pub fn get_settings(settings: &State<RwLock<AppSettings>>) -> Json<SettingsResponse> {
    let settings = read_lock(settings.inner());
    Json(SettingsResponse {
        theme: settings.theme,
        has_passcode: settings.has_passcode(),
    })
}

#[post("/passcode", data = "<request>")]
pub fn set_passcode(
    request: Json<SetPasscodeRequest>,
    settings: &State<RwLock<AppSettings>>,
    db: &State<VaultDb>,
) -> SetPasscodeResponse {
    match service::set_passcode(&request, settings, db) {
        Ok(()) => SetPasscodeResponse::Success(()),
        Err(SetPasscodeError::InvalidFormat) => {
            SetPasscodeResponse::BadRequest(BasicMessage::new("Passcode must be exactly 6 digits."))
        }
        Err(SetPasscodeError::CurrentPasscodeMismatch) => SetPasscodeResponse::Unauthorized(
            BasicMessage::new("The current passcode is missing or incorrect."),
        ),
        Err(SetPasscodeError::DbError) => SetPasscodeResponse::Failure(BasicMessage::new(
            "Failed to save passcode. Check server logs for details",
        )),
    }
}

#[put("/settings/theme", data = "<request>")]
pub fn update_theme(
    request: Json<UpdateThemeRequest>,
    _unlocked: Unlocked,
    settings: &State<RwLock<AppSettings>>,
    db: &State<VaultDb>,
) -> UpdateThemeResponse {
    match service::set_theme(request.theme, settings, db) {
        Ok(updated) => UpdateThemeResponse::Success(Json(SettingsResponse {
            theme: updated.theme,
            has_passcode: updated.has_passcode(),
        })),
        Err(UpdateSettingsError::DbError) => UpdateThemeResponse::Failure(BasicMessage::new(
            "Failed to save theme. Check server logs for details",
        )),
    }
}
