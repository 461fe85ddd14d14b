use thiserror::Error;

/// everything that can go wrong while asking the text generation api for something
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// the api answered with a non-success status
    #[error("AI api error: status={status}, body='{body}'")]
    Api { status: u16, body: String },

    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),
}
