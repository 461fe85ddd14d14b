//! Documents keep their contents as a self-describing data uri (`data:<mime>;base64,<payload>`), the same form a
//! browser's `FileReader.readAsDataURL` produces, so backups stay readable by the browser client.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

/// used when the uploader couldn't tell what kind of file it was
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

static DATA_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^data:(?P<mime>[^;,]*)(?P<params>(?:;[^;,]*)*),(?P<payload>.*)$")
        .expect("data uri regex should compile")
});

#[derive(Debug, PartialEq)]
pub enum DataUriError {
    /// the value doesn't start with `data:` or has no payload separator
    NotADataUri,
    /// the uri says it's base64 but the payload isn't
    InvalidBase64,
}

/// the decoded contents of a data uri
#[derive(Debug, PartialEq)]
pub struct DataUri {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// trims the mime type, falling back to [`DEFAULT_MIME_TYPE`] when there isn't one
pub fn normalize_mime_type(mime_type: &str) -> &str {
    match mime_type.trim() {
        "" => DEFAULT_MIME_TYPE,
        mime => mime,
    }
}

/// builds a base64 data uri out of raw file bytes
pub fn encode(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = normalize_mime_type(mime_type);
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// returns the base64 part of a base64 data uri without decoding it, or `None` if the uri isn't base64
pub fn base64_payload(uri: &str) -> Option<&str> {
    let captures = DATA_URI.captures(uri)?;
    if !is_base64(&captures["params"]) {
        return None;
    }
    captures.name("payload").map(|m| m.as_str())
}

pub fn decode(uri: &str) -> Result<DataUri, DataUriError> {
    let captures = DATA_URI.captures(uri).ok_or(DataUriError::NotADataUri)?;
    let mime_type = match &captures["mime"] {
        "" => DEFAULT_MIME_TYPE.to_string(),
        mime => mime.to_string(),
    };
    let payload = &captures["payload"];
    let bytes = if is_base64(&captures["params"]) {
        STANDARD
            .decode(payload.trim())
            .map_err(|_| DataUriError::InvalidBase64)?
    } else {
        payload.as_bytes().to_vec()
    };
    Ok(DataUri { mime_type, bytes })
}

fn is_base64(params: &str) -> bool {
    params
        .split(';')
        .any(|param| param.eq_ignore_ascii_case("base64"))
}
