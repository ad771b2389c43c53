/// Delay before the automatic print dialog, so the browser has painted the
/// injected document first (ms).
pub const PRINT_SETTLE_DELAY_MS: i32 = 350;

/// Browser side effects of the print tab. The wasm runtime implements this
/// with `window.print()` / `window.close()`; tests substitute a recorder so
/// the dispatch logic runs without a browser.
pub trait PrintHost {
    /// Open the native print dialog.
    fn show_print_dialog(&self);
    /// Close the hosting tab/window.
    fn close_view(&self);
}

/// What the floating toolbar (and the auto-print timer) can ask of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarAction {
    Print,
    Close,
}

/// Single dispatch point for toolbar buttons and the settle-delay timer.
pub fn run_toolbar_action<H: PrintHost>(host: &H, action: ToolbarAction) {
    match action {
        ToolbarAction::Print => host.show_print_dialog(),
        ToolbarAction::Close => host.close_view(),
    }
}
