//! Shared pattern helpers for working on SVG markup as flat text.

use regex::Regex;
use std::sync::LazyLock;

/// `width="…"` as a whole attribute name, so `stroke-width` is never matched.
pub(crate) static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)width="([^"]*)""#).expect("valid width pattern"));

pub(crate) static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)height="([^"]*)""#).expect("valid height pattern"));

pub(crate) static VIEWBOX_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)viewBox="([^"]*)""#).expect("valid viewBox pattern"));

pub(crate) static FILL_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)fill="([^"]*)""#).expect("valid fill pattern"));

pub(crate) static TSPAN_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<tspan[^>]*>(.*?)</tspan>").expect("valid tspan pattern"));

/// Byte offset just past `<svg` of the root element's opening tag.
pub fn find_root_open(document: &str) -> Option<usize> {
    document.match_indices("<svg").find_map(|(start, tag)| {
        let end = start + tag.len();
        match document[end..].chars().next() {
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => Some(end),
            _ => None,
        }
    })
}

/// The root element's start tag, from `<svg` through its closing `>`.
pub fn root_start_tag(document: &str) -> Option<&str> {
    let open = find_root_open(document)?;
    let end = document[open..]
        .find('>')
        .map_or(document.len(), |offset| open + offset + 1);
    Some(&document[open - "<svg".len()..end])
}

/// Insert raw attribute text right after the root tag name.
///
/// Documents without a root `<svg` tag are returned unchanged.
pub fn insert_root_attribute(document: &str, attribute: &str) -> String {
    match find_root_open(document) {
        Some(at) => {
            let mut out = String::with_capacity(document.len() + attribute.len() + 1);
            out.push_str(&document[..at]);
            out.push(' ');
            out.push_str(attribute);
            out.push_str(&document[at..]);
            out
        }
        None => document.to_string(),
    }
}

/// Compile a pattern built around a caller-supplied element id.
///
/// The id is escaped before it is spliced into `template` at every `{id}`.
pub(crate) fn id_pattern(template: &str, id: &str) -> Option<Regex> {
    let pattern = template.replace("{id}", &regex::escape(id));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(element_id = id, error = %e, "could not build element pattern");
            None
        }
    }
}
