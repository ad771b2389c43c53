use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE, URL_SAFE_NO_PAD};
use serde_json::Value;

use crate::error::DecodeError;
use crate::model::{PrintRequest, Section};

/// Mime type assumed for images when the caller does not name one.
pub const DEFAULT_MIME: &str = "image/png";

/// Serialize a request into an opaque token safe to embed as a single URL
/// path segment (URL-safe base64 alphabet, no padding).
pub fn encode(request: &PrintRequest) -> String {
    let json = serde_json::to_string(request).unwrap_or_else(|_| "{}".to_string());
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode strategies tried in order; the first success wins.
///
/// 1. Envelope: urlsafe-base64 → JSON object tagged with `type`.
/// 2. Legacy: standard base64 of a raw HTML string (tokens from before the
///    envelope format existed).
const STRATEGIES: &[fn(&str) -> Result<PrintRequest, DecodeError>] =
    &[decode_envelope, decode_legacy_html];

/// Recover a request from a token. Total: any input yields a renderable
/// request, with malformed tokens mapped to a visible error paragraph.
pub fn decode(token: &str) -> PrintRequest {
    let mut last_err = None;
    for strategy in STRATEGIES {
        match strategy(token) {
            Ok(request) => return request,
            Err(e) => last_err = Some(e),
        }
    }
    let msg = last_err.map(|e| e.to_string()).unwrap_or_default();
    PrintRequest::Html {
        html: format!(r#"<p style="color:red">Decode error: {msg}</p>"#),
    }
}

fn decode_envelope(token: &str) -> Result<PrintRequest, DecodeError> {
    let bytes = URL_SAFE.decode(repad(token)?)?;
    let text = String::from_utf8(bytes)?;
    classify(serde_json::from_str(&text)?)
}

fn decode_legacy_html(token: &str) -> Result<PrintRequest, DecodeError> {
    let bytes = STANDARD.decode(repad(token)?)?;
    let html = String::from_utf8(bytes)?;
    Ok(PrintRequest::Html { html })
}

/// Strip any trailing `=` and re-pad to a multiple of four characters.
fn repad(token: &str) -> Result<String, DecodeError> {
    let trimmed = token.trim_end_matches('=');
    match trimmed.len() % 4 {
        0 => Ok(trimmed.to_string()),
        1 => Err(DecodeError::BadLength(trimmed.len())),
        n => Ok(format!("{}{}", trimmed, "=".repeat(4 - n))),
    }
}

/// Map a parsed envelope onto a request. An object whose `type` is missing,
/// non-string or unrecognized is read as the `html` variant — the `html`
/// field if present, else empty. Sections of a `page` get the same default:
/// anything that is not explicitly an image renders as an HTML section.
fn classify(mut value: Value) -> Result<PrintRequest, DecodeError> {
    let obj = value.as_object_mut().ok_or(DecodeError::NotAnObject)?;
    match obj.get("type").and_then(Value::as_str) {
        Some("html") | Some("image") | Some("page") => {}
        _ => {
            obj.insert("type".to_string(), Value::String("html".to_string()));
        }
    }
    if let Some(sections) = obj.get_mut("sections").and_then(Value::as_array_mut) {
        for section in sections {
            if let Some(sec) = section.as_object_mut()
                && sec.get("type").and_then(Value::as_str) != Some("image")
            {
                sec.insert("type".to_string(), Value::String("html".to_string()));
            }
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Encode a raw HTML fragment for the `/print/{token}` URL.
pub fn encode_html(html: &str) -> String {
    encode(&PrintRequest::Html {
        html: html.to_string(),
    })
}

/// Encode a base64 image for the `/print/{token}` URL.
///
/// `data` must be a plain base64 string — no `data:…;base64,` prefix.
pub fn encode_image(data: &str, mime: &str, caption: &str) -> String {
    encode(&PrintRequest::Image {
        data: data.to_string(),
        mime: mime.to_string(),
        caption: caption.to_string(),
    })
}

/// Encode a structured multi-section document for the `/print/{token}` URL.
pub fn encode_page(title: &str, subtitle: &str, sections: Vec<Section>) -> String {
    encode(&PrintRequest::Page {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        sections,
    })
}

/// URL of the standalone print route for a token.
pub fn print_path(token: &str) -> String {
    format!("/print/{token}")
}
