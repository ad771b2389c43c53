//! End-to-end runs over the kind of documents the dashboard actually prints:
//! an HTML order report and an inline SVG chart image.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use printview_core::{PrintRequest, Section, decode, encode_image, encode_page, render};

const ORDER_TABLE: &str = "\
<table>
  <thead>
    <tr><th>Order ID</th><th>Customer</th><th>Qty</th><th>Status</th></tr>
  </thead>
  <tbody>
    <tr><td>ORD-1041</td><td>Acme GmbH</td><td>240</td><td>Shipped</td></tr>
    <tr><td>ORD-1042</td><td>Beta AG</td><td>55</td><td>Pending</td></tr>
    <tr><td>ORD-1043</td><td>Gamma KG</td><td>130</td><td>Packed</td></tr>
  </tbody>
</table>";

const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="320">
  <rect width="640" height="320" fill="#fafafa" rx="10"/>
  <text x="320" y="36" text-anchor="middle" font-size="17">Monthly Throughput</text>
  <rect x="65" y="135" width="55" height="120" fill="#18181b" rx="4"/>
  <rect x="140" y="100" width="55" height="155" fill="#18181b" rx="4"/>
</svg>"##;

#[test]
fn svg_chart_prints_as_captioned_image() {
    let b64 = STANDARD.encode(SAMPLE_SVG);
    let token = encode_image(&b64, "image/svg+xml", "Monthly throughput");

    let request = decode(&token);
    assert_eq!(
        request,
        PrintRequest::Image {
            data: b64.clone(),
            mime: "image/svg+xml".to_string(),
            caption: "Monthly throughput".to_string(),
        }
    );

    let fragment = render(&request);
    assert!(fragment.contains(&format!("data:image/svg+xml;base64,{b64}")));
    assert!(fragment.contains("Monthly throughput"));
}

#[test]
fn order_report_page_survives_the_full_pipeline() {
    let chart_b64 = STANDARD.encode(SAMPLE_SVG);
    let token = encode_page(
        "Order Report",
        "Week 9",
        vec![
            Section::Html {
                content: "<p>Units packed: <b>1 240</b> — on time: <b>97 %</b></p>".to_string(),
            },
            Section::Image {
                data: chart_b64.clone(),
                mime: "image/svg+xml".to_string(),
                caption: "Throughput".to_string(),
            },
            Section::Html {
                content: ORDER_TABLE.to_string(),
            },
        ],
    );

    // The token must survive as a single URL path segment.
    assert!(!token.contains('/'));
    assert!(!token.contains('+'));
    assert!(!token.contains('='));

    let fragment = render(&decode(&token));
    let title = fragment.find("Order Report").unwrap();
    let summary = fragment.find("Units packed").unwrap();
    let chart = fragment.find("data:image/svg+xml;base64,").unwrap();
    let table = fragment.find("ORD-1041").unwrap();
    assert!(title < summary);
    assert!(summary < chart);
    assert!(chart < table);
}
