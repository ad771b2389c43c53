//! Browser runtime for the `/print/{token}` tab plus the token construction
//! API exported to the hosting application's JavaScript.
//!
//! On a print route the startup path is: decode the token, render the
//! fragment, mount it with the floating toolbar, then auto-open the print
//! dialog after a short settle delay and close the tab once the dialog is
//! dismissed. The toolbar buttons stay as the manual fallback.

use printview_core::{Section, ToolbarAction, print_path, run_toolbar_action};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

mod host;
mod page;
mod utils;

use host::DomHost;
use utils::{log, token_from_path};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let path = window.location().pathname()?;
    let Some(token) = token_from_path(&path) else {
        // Not a print tab; only the encode helpers are in use here.
        return Ok(());
    };

    let request = printview_core::decode(&token);
    let fragment = printview_core::render(&request);
    page::mount(&document, &fragment)?;
    attach_toolbar(&document)?;
    host::schedule_auto_print(&window)?;
    Ok(())
}

/// Wire the manual Print/Close buttons through the same dispatch point the
/// auto-print timer uses.
fn attach_toolbar(document: &Document) -> Result<(), JsValue> {
    for (id, action) in [
        ("pw-print", ToolbarAction::Print),
        ("pw-close", ToolbarAction::Close),
    ] {
        if let Some(btn) = document.get_element_by_id(id) {
            let btn: HtmlElement = btn.dyn_into()?;
            let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(win) = web_sys::window() {
                    run_toolbar_action(&DomHost::new(win), action);
                }
            }));
            btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
            onclick.forget();
        }
    }
    Ok(())
}

/// Encode a raw HTML fragment for the `/print/{token}` URL.
#[wasm_bindgen]
pub fn encode_html(html: &str) -> String {
    printview_core::encode_html(html)
}

/// Encode a base64 image for the `/print/{token}` URL.
///
/// `data` must be a plain base64 string — no `data:…;base64,` prefix.
/// `mime` defaults to `image/png`, `caption` to none.
#[wasm_bindgen]
pub fn encode_image(data: &str, mime: Option<String>, caption: Option<String>) -> String {
    printview_core::encode_image(
        data,
        mime.as_deref().unwrap_or(printview_core::DEFAULT_MIME),
        caption.as_deref().unwrap_or(""),
    )
}

/// Encode a structured multi-section document for the `/print/{token}` URL.
///
/// `sections_json` is a JSON array of section objects, e.g.
/// `[{"type":"html","content":"<p>…</p>"},
///   {"type":"image","content":"iVBOR…","mime":"image/jpeg","caption":"Chart"}]`.
#[wasm_bindgen]
pub fn encode_page(title: &str, subtitle: Option<String>, sections_json: Option<String>) -> String {
    let sections: Vec<Section> = match sections_json.as_deref() {
        None | Some("") => Vec::new(),
        Some(json) => match serde_json::from_str(json) {
            Ok(sections) => sections,
            Err(e) => {
                log(&format!("encode_page: unparsable sections, using none: {e}"));
                Vec::new()
            }
        },
    };
    printview_core::encode_page(title, subtitle.as_deref().unwrap_or(""), sections)
}

/// Open `/print/{token}` in a new browser tab — call after `encode_*`.
#[wasm_bindgen]
pub fn open_print(token: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    window.open_with_url_and_target(&print_path(token), "_blank")?;
    Ok(())
}
