use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

pub mod ai_responses;
pub mod backup_responses;
pub mod document_responses;
pub mod folder_responses;
pub mod settings_responses;

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}
