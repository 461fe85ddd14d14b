pub mod document_requests;
pub mod folder_requests;
pub mod settings_requests;
