use rocket::serde::json::Json;

use crate::ai::AiResponse;
use crate::model::response::BasicMessage;

#[derive(Responder)]
pub enum SummarizeResponse {
    #[response(status = 200)]
    Success(Json<AiResponse>),
    #[response(status = 404, content_type = "json")]
    DocumentNotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum ChatResponse {
    #[response(status = 200)]
    Success(Json<AiResponse>),
    #[response(status = 500, content_type = "json")]
    DocumentDbError(Json<BasicMessage>),
}
