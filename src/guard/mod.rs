use std::sync::RwLock;

use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::settings::service::check_passcode;
use crate::settings::AppSettings;
use crate::util::read_lock;

/// name of the header clients send the passcode in
pub const PASSCODE_HEADER: &str = "X-Vault-Passcode";

/// request guard for every route that touches the vault. Only succeeds if the request carries the current passcode
#[derive(Debug)]
pub struct Unlocked;

#[derive(Debug, PartialEq)]
pub enum UnlockError {
    /// no passcode has been set up yet, so nothing can be unlocked
    NoPasscodeSet,
    Missing,
    Invalid,
}

#[async_trait]
impl<'r> FromRequest<'r> for Unlocked {
    type Error = UnlockError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(settings) = request.rocket().state::<RwLock<AppSettings>>() else {
            log::error!("Settings are not being managed, cannot check passcode");
            return Outcome::Error((Status::InternalServerError, UnlockError::Invalid));
        };
        let settings = read_lock(settings);
        if !settings.has_passcode() {
            return Outcome::Error((Status::Unauthorized, UnlockError::NoPasscodeSet));
        }
        match request.headers().get_one(PASSCODE_HEADER) {
            None => Outcome::Error((Status::Unauthorized, UnlockError::Missing)),
            Some(passcode) if check_passcode(&settings, passcode.trim()) => Outcome::Success(Unlocked),
            Some(_) => Outcome::Error((Status::Unauthorized, UnlockError::Invalid)),
        }
    }
}
