use rocket::serde::json::Json;
use rocket::State;

use crate::ai::{service, AiState, AiStatus, ChatRequest};
use crate::documents::service as document_service;
use crate::guard::Unlocked;
use crate::model::error::document_errors::GetDocumentError;
use crate::model::response::ai_responses::{ChatResponse, SummarizeResponse};
use crate::model::response::BasicMessage;
use crate::repository::VaultDb;

/// generates a summary of the document and saves it on the document if generation worked
#[post("/documents/<id>/summary")]
pub async fn summarize_document(
    id: &str,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
    ai: &State<AiState>,
) -> SummarizeResponse {
    let doc = match document_service::get_document(id, db) {
        Ok(doc) => doc,
        Err(GetDocumentError::NotFound) => {
            return SummarizeResponse::DocumentNotFound(BasicMessage::new(
                "The document with the passed id could not be found.",
            ))
        }
        Err(_) => {
            return SummarizeResponse::DocumentDbError(BasicMessage::new(
                "Failed to pull document from database. Check server logs for details",
            ))
        }
    };
    let summary = service::summarize_document(&doc, ai.generator()).await;
    if summary.status == AiStatus::Success {
        if let Err(e) = document_service::save_summary(id, &summary.text, db) {
            log::warn!("Generated a summary for {id} but failed to save it: {e:?}");
        }
    }
    SummarizeResponse::Success(Json(summary))
}

#[post("/chat", data = "<request>")]
pub async fn chat(
    request: Json<ChatRequest>,
    _unlocked: Unlocked,
    db: &State<VaultDb>,
    ai: &State<AiState>,
) -> ChatResponse {
    let documents = match document_service::list_documents(db) {
        Ok(documents) => documents,
        Err(_) => {
            return ChatResponse::DocumentDbError(BasicMessage::new(
                "Failed to pull documents from database. Check server logs for details",
            ))
        }
    };
    let answer = service::chat_with_knowledge(&request.query, &documents, ai.generator()).await;
    ChatResponse::Success(Json(answer))
}
