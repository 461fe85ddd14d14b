pub mod backup_errors;
pub mod document_errors;
pub mod folder_errors;
pub mod preview_errors;
pub mod settings_errors;
