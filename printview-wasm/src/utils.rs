use wasm_bindgen::JsValue;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Extract the token segment from a `/print/{token}` pathname.
///
/// Returns `None` when the page is not a print route (the same bundle is
/// loaded by pages that only use the encode helpers). Tolerates a base
/// prefix before `/print/` and a trailing slash; percent-escapes added by
/// the router are undone.
pub fn token_from_path(path: &str) -> Option<String> {
    let (_, rest) = path.split_once("/print/")?;
    let raw = rest.trim_end_matches('/');
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    Some(
        percent_encoding::percent_decode_str(raw)
            .decode_utf8()
            .unwrap_or_else(|_| raw.into())
            .to_string(),
    )
}
