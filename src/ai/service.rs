use crate::ai::client::TextGenerator;
use crate::ai::{AiResponse, PromptPart};
use crate::documents::data_uri;
use crate::model::repository::{DocumentMetadata, DocumentRecord};

pub const SUMMARY_FALLBACK: &str = "No analysis generated.";
pub const SUMMARY_FAILURE: &str = "Error analyzing document. Please check your connection.";
pub const CHAT_FALLBACK: &str = "I'm not sure how to answer that.";
pub const CHAT_FAILURE: &str = "AI is temporarily unavailable.";
pub const NOT_CONFIGURED: &str = "AI features are not configured on this server.";

const IMAGE_PROMPT: &str = "Look at this image of my college notes. Please provide a clear, bulleted summary of the content and identify key concepts mentioned.";

fn is_image(doc: &DocumentRecord) -> bool {
    doc.mime_type.starts_with("image/")
}

/// builds the prompt for summarizing `doc`. Images are sent inline, everything else is only described by its name
pub fn summary_prompt(doc: &DocumentRecord) -> Vec<PromptPart> {
    if !is_image(doc) {
        return vec![PromptPart::Text(format!(
            "I have a document named \"{}\". Assuming it's a study note or document, what are the likely key themes based on the filename?",
            doc.name
        ))];
    }
    let mut parts = vec![PromptPart::Text(IMAGE_PROMPT.to_string())];
    match data_uri::base64_payload(&doc.data) {
        Some(payload) => parts.push(PromptPart::InlineData {
            mime_type: doc.mime_type.clone(),
            data: payload.to_string(),
        }),
        None => log::warn!("Document {} has no readable image data, summarizing without it", doc.id),
    }
    parts
}

/// the prompt for a question about the vault. The model only gets to see document names and types
pub fn chat_prompt(query: &str, documents: &[DocumentMetadata]) -> String {
    let context = documents
        .iter()
        .map(|doc| format!("- {} ({})", doc.name, doc.mime_type))
        .collect::<Vec<String>>()
        .join("\n");
    format!(
        "You are a helpful study assistant. The user has the following documents in their vault:\n{context}\n\nUser Question: {query}"
    )
}

pub async fn summarize_document(
    doc: &DocumentRecord,
    generator: Option<&dyn TextGenerator>,
) -> AiResponse {
    let Some(generator) = generator else {
        return AiResponse::error(NOT_CONFIGURED);
    };
    match generator.generate(summary_prompt(doc)).await {
        Ok(text) if text.trim().is_empty() => AiResponse::success(SUMMARY_FALLBACK),
        Ok(text) => AiResponse::success(text),
        Err(e) => {
            log::error!("Failed to summarize document {}: {e}", doc.id);
            AiResponse::error(SUMMARY_FAILURE)
        }
    }
}

pub async fn chat_with_knowledge(
    query: &str,
    documents: &[DocumentMetadata],
    generator: Option<&dyn TextGenerator>,
) -> AiResponse {
    let Some(generator) = generator else {
        return AiResponse::error(NOT_CONFIGURED);
    };
    let prompt = vec![PromptPart::Text(chat_prompt(query, documents))];
    match generator.generate(prompt).await {
        Ok(text) if text.trim().is_empty() => AiResponse::success(CHAT_FALLBACK),
        Ok(text) => AiResponse::success(text),
        Err(e) => {
            log::error!("Failed to answer chat query: {e}");
            AiResponse::error(CHAT_FAILURE)
        }
    }
}
