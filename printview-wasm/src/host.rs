use printview_core::{PRINT_SETTLE_DELAY_MS, PrintHost, ToolbarAction, run_toolbar_action};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// [`PrintHost`] backed by the real browser window.
pub struct DomHost {
    window: Window,
}

impl DomHost {
    pub fn new(window: Window) -> Self {
        DomHost { window }
    }
}

impl PrintHost for DomHost {
    fn show_print_dialog(&self) {
        // Fails in sandboxed contexts; the toolbar button stays as the
        // manual path, so the error is not surfaced.
        let _ = self.window.print();
    }

    fn close_view(&self) {
        let _ = self.window.close();
    }
}

/// Wire the auto-print flow: once the dialog is dismissed the tab closes,
/// and after the settle delay the dialog opens on its own.
pub fn schedule_auto_print(window: &Window) -> Result<(), JsValue> {
    // onafterprint first, so a dialog dismissed quickly still closes the tab.
    let close_win = window.clone();
    let after_print = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        run_toolbar_action(&DomHost::new(close_win.clone()), ToolbarAction::Close);
    }));
    window.set_onafterprint(Some(after_print.as_ref().unchecked_ref()));
    after_print.forget();

    let print_win = window.clone();
    let fire = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        run_toolbar_action(&DomHost::new(print_win.clone()), ToolbarAction::Print);
    }));
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        fire.as_ref().unchecked_ref(),
        PRINT_SETTLE_DELAY_MS,
    )?;
    fire.forget();
    Ok(())
}
