//! Print view core — builds URL tokens for the `/print/{token}` route and
//! turns decoded tokens back into an A4-style HTML fragment.
//!
//! Typical usage from the hosting application:
//!
//! ```
//! use printview_core::{encode_html, encode_page, print_path, Section};
//!
//! // Raw HTML
//! let token = encode_html("<h1>Hello</h1><p>World</p>");
//! let url = print_path(&token); // "/print/…"
//!
//! // Structured document with mixed sections
//! let token = encode_page(
//!     "Daily Report",
//!     "2026-02-27",
//!     vec![
//!         Section::Html { content: "<p>Summary paragraph…</p>".into() },
//!         Section::Image {
//!             data: "iVBORw0…".into(),
//!             mime: "image/jpeg".into(),
//!             caption: "Chart A".into(),
//!         },
//!     ],
//! );
//! # let _ = (url, token);
//! ```
//!
//! The receiving print tab calls [`decode`] on the path segment and
//! [`render`] on the result. `decode` is total: malformed tokens come back
//! as an error page, never as a panic or a blank tab.

mod codec;
mod error;
mod host;
mod model;
mod render;

pub use codec::{
    DEFAULT_MIME, decode, encode, encode_html, encode_image, encode_page, print_path,
};
pub use error::DecodeError;
pub use host::{PRINT_SETTLE_DELAY_MS, PrintHost, ToolbarAction, run_toolbar_action};
pub use model::{PrintRequest, Section};
pub use render::render;
