use crate::model::{PrintRequest, Section};

/// Render a decoded request into the HTML fragment hosted inside the print
/// wrapper. Deterministic: the same request always yields identical bytes.
///
/// Content is emitted verbatim — callers of the encode helpers are trusted,
/// this is not a user-input surface.
pub fn render(request: &PrintRequest) -> String {
    match request {
        PrintRequest::Html { html } => section_html(html),
        PrintRequest::Image {
            data,
            mime,
            caption,
        } => image_html(data, mime, caption),
        PrintRequest::Page {
            title,
            subtitle,
            sections,
        } => {
            let mut parts = Vec::new();
            if !title.is_empty() {
                parts.push(format!(r#"<div class="pw-title">{title}</div>"#));
            }
            if !subtitle.is_empty() {
                parts.push(format!(r#"<div class="pw-subtitle">{subtitle}</div>"#));
            }
            for section in sections {
                parts.push(render_section(section));
            }
            parts.concat()
        }
    }
}

fn render_section(section: &Section) -> String {
    match section {
        Section::Html { content } => section_html(content),
        Section::Image {
            data,
            mime,
            caption,
        } => image_html(data, mime, caption),
    }
}

fn section_html(content: &str) -> String {
    format!(r#"<div class="pw-section">{content}</div>"#)
}

fn image_html(data: &str, mime: &str, caption: &str) -> String {
    let cap = if caption.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="pw-caption">{caption}</div>"#)
    };
    format!(
        r#"<div class="pw-section pw-img-wrap"><img src="data:{mime};base64,{data}" alt="{caption}">{cap}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode_html};

    #[test]
    fn html_is_wrapped_in_a_section_container() {
        let out = render(&PrintRequest::Html {
            html: "<p>ok</p>".to_string(),
        });
        assert_eq!(out, r#"<div class="pw-section"><p>ok</p></div>"#);
    }

    #[test]
    fn image_src_carries_mime_and_plain_payload() {
        let out = render(&PrintRequest::Image {
            data: "AAAA".to_string(),
            mime: "image/png".to_string(),
            caption: "x".to_string(),
        });
        assert!(out.contains("data:image/png;base64,AAAA"));
        assert!(out.contains(r#"<div class="pw-caption">x</div>"#));
    }

    #[test]
    fn empty_caption_emits_no_caption_block() {
        let out = render(&PrintRequest::Image {
            data: "AAAA".to_string(),
            mime: "image/png".to_string(),
            caption: String::new(),
        });
        assert!(!out.contains("pw-caption"));
    }

    #[test]
    fn page_sections_render_in_insertion_order() {
        let out = render(&PrintRequest::Page {
            title: "T".to_string(),
            subtitle: String::new(),
            sections: vec![
                Section::Html {
                    content: "A".to_string(),
                },
                Section::Image {
                    data: "BBBB".to_string(),
                    mime: "image/jpeg".to_string(),
                    caption: String::new(),
                },
            ],
        });
        let title = out.find("T").unwrap();
        let html_section = out.find(r#"<div class="pw-section">A</div>"#).unwrap();
        let image_section = out.find("data:image/jpeg;base64,BBBB").unwrap();
        assert!(title < html_section);
        assert!(html_section < image_section);
    }

    #[test]
    fn empty_page_fields_are_suppressed() {
        let out = render(&PrintRequest::Page {
            title: String::new(),
            subtitle: String::new(),
            sections: Vec::new(),
        });
        assert!(!out.contains("pw-title"));
        assert!(!out.contains("pw-subtitle"));
        assert!(out.is_empty());
    }

    #[test]
    fn render_is_deterministic() {
        let req = PrintRequest::Page {
            title: "T".to_string(),
            subtitle: "S".to_string(),
            sections: vec![Section::Html {
                content: "body".to_string(),
            }],
        };
        assert_eq!(render(&req), render(&req));
    }

    #[test]
    fn encode_decode_render_end_to_end() {
        let token = encode_html("<p>ok</p>");
        let request = decode(&token);
        assert_eq!(
            request,
            PrintRequest::Html {
                html: "<p>ok</p>".to_string(),
            }
        );
        assert_eq!(
            render(&request),
            r#"<div class="pw-section"><p>ok</p></div>"#
        );
    }
}
