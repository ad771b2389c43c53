use thiserror::Error;

/// Why a single decode strategy rejected a token.
///
/// Never escapes [`crate::decode`]: a failure here selects the next strategy
/// in the chain, and the last one left standing becomes the visible
/// `Decode error:` page.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token length {0} cannot be padded to valid base64")]
    BadLength(usize),
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("decoded bytes are not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("envelope JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("envelope is not a JSON object")]
    NotAnObject,
}
