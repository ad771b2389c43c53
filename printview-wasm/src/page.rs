use wasm_bindgen::JsValue;
use web_sys::Document;

/// Print stylesheet: screen preview wrapper plus `@media print` rules that
/// strip the chrome. Injected into `<head>` by [`mount`].
const PRINT_CSS: &str = r##"
  /* Screen preview wrapper */
  @media screen {
    body { background: #f3f4f6; margin: 0; font-family: system-ui, -apple-system, sans-serif; }
    #pw  {
      max-width: 210mm; margin: 24px auto; background: #fff;
      padding: 32px 40px; box-shadow: 0 2px 16px rgba(0,0,0,.12);
      border-radius: 6px; min-height: 100vh;
    }
    .no-print { display: flex; }
  }
  /* Actual print output — strip chrome */
  @media print {
    body { margin: 0; }
    #pw  { box-shadow: none; padding: 0; margin: 0; border-radius: 0; }
    .no-print { display: none !important; }
  }
  /* Typography */
  .pw-title    { font-size: 22px; font-weight: 700; margin: 0 0 4px;  color: #111827; }
  .pw-subtitle { font-size: 13px; color: #6b7280;   margin: 0 0 24px; }
  .pw-section  { margin-bottom: 24px; }
  h1 { font-size: 18px; font-weight: 600; margin-bottom: 12px; color: #111827; }
  h2 { font-size: 15px; font-weight: 600; margin-bottom: 10px; color: #111827; }
  p, li { font-size: 13px; line-height: 1.6; color: #374151; }
  /* Images */
  .pw-img-wrap img { max-width: 100%; height: auto; display: block; border-radius: 4px; }
  .pw-caption { text-align: center; font-size: 11px; color: #9ca3af; margin-top: 6px; }
  /* Tables */
  table  { width: 100%; border-collapse: collapse; margin: 4px 0 12px; }
  th     { background: #f9fafb; font-weight: 600; text-align: left; }
  th, td { padding: 8px 12px; border: 1px solid #e5e7eb; font-size: 13px; }
  tr:nth-child(even) td { background: #f9fafb; }
  /* Screen-only print/close toolbar */
  #pw-toolbar {
    position: fixed; top: 12px; right: 16px;
    display: flex; gap: 8px; z-index: 100;
  }
  #pw-toolbar button {
    padding: 8px 18px; border-radius: 7px; border: none;
    font-size: 15px; font-weight: 600; cursor: pointer;
    background: #18181b; color: #fff; transition: background .15s;
    display: flex; align-items: center; gap: 7px;
  }
  #pw-toolbar button:hover { background: #3f3f46; }
  #pw-toolbar button.secondary {
    background: #f4f4f5; color: #18181b; border: 1px solid #d4d4d8;
  }
  #pw-toolbar button.secondary:hover { background: #e4e4e7; }
"##;

/// Floating toolbar shown on screen only; the buttons are wired up by
/// `attach_toolbar` after mounting.
const TOOLBAR_HTML: &str = r##"<div id="pw-toolbar" class="no-print">
  <button id="pw-print"><span>🖨</span><span>Print</span></button>
  <button id="pw-close" class="secondary"><span>✕</span><span>Close</span></button>
</div>"##;

/// Inject the stylesheet and replace the body with the toolbar plus the
/// rendered document inside the `#pw` wrapper.
pub fn mount(document: &Document, fragment: &str) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(PRINT_CSS));
    let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&style)?;

    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
    body.set_inner_html(&format!(r#"{TOOLBAR_HTML}<div id="pw">{fragment}</div>"#));
    Ok(())
}
