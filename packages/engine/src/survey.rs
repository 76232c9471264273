//! Element inventory for the debug page.

use regex::Regex;
use std::sync::LazyLock;

static START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z][\w:.-]*)(\s[^>]*)?>").expect("valid tag pattern"));

static ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sid="([^"]*)""#).expect("valid id pattern"));

static FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sfill="([^"]*)""#).expect("valid fill pattern"));

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid pattern"));

/// An addressable element: something with an `id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSummary {
    pub tag: String,
    pub id: String,
    pub fill: Option<String>,

    /// Rendered text of `<text>` elements
    pub text: Option<String>,
}

/// Every start tag with an `id`, in document order.
pub fn survey(document: &str) -> Vec<ElementSummary> {
    let mut elements = Vec::new();

    for caps in START_TAG.captures_iter(document) {
        let attributes = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let Some(id) = ID.captures(attributes) else {
            continue;
        };

        let tag = caps[1].to_string();
        let text = if tag == "text" {
            let rest = &document[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
            rest.find("</text>")
                .map(|end| ANY_TAG.replace_all(&rest[..end], "").trim().to_string())
                .filter(|text| !text.is_empty())
        } else {
            None
        };

        elements.push(ElementSummary {
            tag,
            id: id[1].to_string(),
            fill: FILL.captures(attributes).map(|c| c[1].to_string()),
            text,
        });
    }

    elements
}
