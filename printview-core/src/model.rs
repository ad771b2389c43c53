use serde::{Deserialize, Serialize};

pub(crate) fn default_mime() -> String {
    crate::codec::DEFAULT_MIME.to_string()
}

/// One print job, as carried inside a token. The `type` field on the wire
/// selects the variant: `"html"`, `"image"` or `"page"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrintRequest {
    /// A raw HTML fragment, rendered verbatim.
    Html {
        #[serde(default)]
        html: String,
    },
    /// A single image. `data` is a plain base64 payload — no
    /// `data:…;base64,` prefix; the renderer adds it.
    Image {
        #[serde(default)]
        data: String,
        #[serde(default = "default_mime")]
        mime: String,
        #[serde(default)]
        caption: String,
    },
    /// A structured document: optional title/subtitle plus ordered sections.
    Page {
        #[serde(default)]
        title: String,
        #[serde(default)]
        subtitle: String,
        #[serde(default)]
        sections: Vec<Section>,
    },
}

/// One HTML-or-image block inside a [`PrintRequest::Page`].
///
/// Both variants key their payload as `content` on the wire; the `type`
/// discriminator tells them apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Html {
        #[serde(default)]
        content: String,
    },
    Image {
        /// Plain base64 payload, same rules as [`PrintRequest::Image`].
        #[serde(rename = "content", default)]
        data: String,
        #[serde(default = "default_mime")]
        mime: String,
        #[serde(default)]
        caption: String,
    },
}
