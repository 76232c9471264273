//! HTML pages: the usage guide and the per-file debug view.

use std::fmt::Write;
use svgweb_engine::{escape_html, survey, ElementSummary, Geometry};

/// Tags that could take a fill even when they have none yet
const FILLABLE_TAGS: &[&str] = &["rect", "path", "circle", "polygon", "g"];

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>SVG Web Elements</title>
    <style>
        body { font-family: system-ui, -apple-system, sans-serif; max-width: 800px; margin: 0 auto; padding: 2rem; line-height: 1.5; }
        code { background: #f1f1f1; padding: 0.2rem 0.4rem; border-radius: 3px; }
        .example { margin: 2rem 0; padding: 1rem; border: 1px solid #e0e0e0; border-radius: 4px; }
    </style>
</head>
<body>
    <h1>SVG Web Elements</h1>
    <p>Customizable SVG illustrations, driven by URL parameters.</p>
    <p>See the <a href="/list">available SVGs</a> or inspect one with the <a href="/debug?svg=basic-auth.svg">debug page</a>.</p>

    <h2>Usage</h2>
    <code>&lt;img src="/ui/basic-auth.svg?width=400&amp;text.text-title=Login" /&gt;</code>

    <div class="example">
        <img src="/ui/basic-auth.svg" alt="Unmodified" />
        <p><code>/ui/basic-auth.svg</code></p>
    </div>
    <div class="example">
        <img src="/ui/basic-auth.svg?text.text-title=Login&amp;url=example.com" alt="Modified text" />
        <p><code>/ui/basic-auth.svg?text.text-title=Login&amp;url=example.com</code></p>
    </div>
    <div class="example">
        <img src="/ui/basic-auth.svg?width=400" alt="Scaled" />
        <p><code>/ui/basic-auth.svg?width=400</code> (height follows the original aspect ratio)</p>
    </div>
    <div class="example">
        <img src="/ui/basic-auth.svg?color.page-background=%23f0f9ff&amp;color.btn-background_2=%230ea5e9" alt="Modified colors" />
        <p><code>/ui/basic-auth.svg?color.page-background=%23f0f9ff&amp;color.btn-background_2=%230ea5e9</code></p>
    </div>

    <h2>Parameters</h2>
    <ul>
        <li><code>width</code>, <code>height</code>: target size; give one and the other scales proportionally</li>
        <li><code>text.{element-id}</code>: replace the text of an element</li>
        <li><code>color.{element-id}</code>: replace the fill of an element that already has one (write <code>#</code> as <code>%23</code>)</li>
        <li><code>url</code>: shown in the <code>text-url</code> element, HTML-escaped</li>
    </ul>
</body>
</html>
"##;

/// Debug view of one document: preview, geometry, addressable elements,
/// the JSON report of the previewed transform and the raw source.
pub fn debug_page(name: &str, document: &str, preview: &str, report: &str) -> String {
    let name_html = escape_html(name);
    let name_url = encode_query_value(name);
    let geometry = Geometry::extract(document);
    let elements = survey(document);

    let mut html = String::with_capacity(document.len() * 2 + 4096);
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html>
<head>
    <title>SVG Debug - {name_html}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; padding: 2rem; line-height: 1.5; }}
        pre {{ background: #f1f1f1; padding: 1rem; overflow: auto; }}
        .grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }}
        .element {{ margin-bottom: 1rem; border: 1px solid #ddd; padding: 1rem; }}
        .swatch {{ display: inline-block; width: 20px; height: 20px; vertical-align: middle; border: 1px solid #ccc; }}
    </style>
</head>
<body>
    <h1>SVG Debug for {name_html}</h1>
    <p><a href="/">&larr; Back to home</a></p>
    <p>
        <strong>Scaling:</strong>
        <a href="/ui/{name_url}?width=400" target="_blank">width=400</a> |
        <a href="/ui/{name_url}?height=200" target="_blank">height=200</a> |
        <a href="/ui/{name_url}?width=500&amp;height=250" target="_blank">width=500&amp;height=250</a>
    </p>
    <div class="grid">
        <div>
            <h2>Preview</h2>
            <div style="border: 1px solid #ddd; padding: 1rem;">{preview}</div>
        </div>
        <div>
            <h2>Scaling</h2>
            <div class="element">
                <strong>Original size:</strong> {width} x {height}<br>
                <strong>viewBox:</strong> {view_box}
            </div>
"#,
        width = escape_html(&geometry.width),
        height = escape_html(&geometry.height),
        view_box = geometry
            .view_box
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| "Not specified".to_string()),
    );

    html.push_str("            <h2>Text Elements</h2>\n");
    let texts: Vec<_> = elements.iter().filter(|e| e.text.is_some()).collect();
    if texts.is_empty() {
        html.push_str("            <p>No text elements found</p>\n");
    }
    for element in texts {
        write_text_element(&mut html, element);
    }

    html.push_str("            <h2>Color Elements</h2>\n");
    let colors: Vec<_> = elements
        .iter()
        .filter(|e| e.fill.is_some() || FILLABLE_TAGS.contains(&e.tag.as_str()))
        .collect();
    if colors.is_empty() {
        html.push_str("            <p>No color elements found</p>\n");
    }
    for element in colors {
        write_color_element(&mut html, element);
    }

    let _ = write!(
        html,
        r#"        </div>
    </div>
    <h2>Transform Report</h2>
    <p>Add edit parameters to this page's URL (<code>&amp;width=400</code>, <code>&amp;text.{{id}}=...</code>) to preview them.</p>
    <pre>{}</pre>
    <h2>Raw Source</h2>
    <pre>{}</pre>
</body>
</html>
"#,
        escape_html(report),
        escape_html(document)
    );

    html
}

fn write_text_element(html: &mut String, element: &ElementSummary) {
    let _ = writeln!(
        html,
        r#"            <div class="element"><strong>ID:</strong> {id}<br><strong>Text:</strong> "{text}"<br><strong>Element:</strong> {tag}<br><code>text.{id}=New+Text</code></div>"#,
        id = escape_html(&element.id),
        text = escape_html(element.text.as_deref().unwrap_or_default()),
        tag = escape_html(&element.tag),
    );
}

fn write_color_element(html: &mut String, element: &ElementSummary) {
    let id = escape_html(&element.id);
    let tag = escape_html(&element.tag);
    match &element.fill {
        Some(fill) => {
            let fill = escape_html(fill);
            let _ = writeln!(
                html,
                r#"            <div class="element"><strong>ID:</strong> {id}<br><strong>Element:</strong> {tag}<br><strong>Fill:</strong> <span class="swatch" style="background:{fill}"></span> {fill}<br><code>color.{id}=%23ff0000</code></div>"#,
            );
        }
        None => {
            let _ = writeln!(
                html,
                r#"            <div class="element"><strong>ID:</strong> {id}<br><strong>Element:</strong> {tag}<br><strong>No fill attribute</strong>: color changes do not apply until one is added to the source</div>"#,
            );
        }
    }
}

/// Percent-encode a value for use in a query string or path segment
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}
