use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

use crate::model::response::BasicMessage;
use crate::settings::Theme;

type NoContent = ();

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub theme: Theme,
    /// whether the vault has been locked with a passcode yet
    pub has_passcode: bool,
}

#[derive(Responder)]
pub enum SetPasscodeResponse {
    #[response(status = 204)]
    Success(NoContent),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 401, content_type = "json")]
    Unauthorized(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateThemeResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<SettingsResponse>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
