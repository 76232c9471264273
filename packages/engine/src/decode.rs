//! Query parameters -> [`EditRequest`].
//!
//! Recognized keys: `width`, `height`, `text.<id>`, `color.<id>` and `url`.
//! The first value of a repeated key wins. Anything else is ignored.

use crate::error::{SvgError, SvgResult};
use crate::request::EditRequest;

pub const TEXT_PREFIX: &str = "text.";
pub const COLOR_PREFIX: &str = "color.";

/// Element id that receives the escaped `url` parameter
pub const URL_TEXT_ID: &str = "text-url";

/// Build an edit request from already url-decoded query pairs.
pub fn decode_query<I, K, V>(pairs: I) -> SvgResult<EditRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut request = EditRequest::new();
    let mut url: Option<String> = None;

    for (key, value) in pairs {
        let key = key.as_ref();
        let value = value.into();

        match key {
            "width" => {
                if request.width.is_none() && !value.is_empty() {
                    request.width = Some(value);
                }
            }
            "height" => {
                if request.height.is_none() && !value.is_empty() {
                    request.height = Some(value);
                }
            }
            "url" => {
                if url.is_none() && !value.is_empty() {
                    url = Some(value);
                }
            }
            _ => {
                if let Some(id) = key.strip_prefix(TEXT_PREFIX) {
                    validate_element_id(key, id)?;
                    request
                        .text_replacements
                        .entry(id.to_string())
                        .or_insert(value);
                } else if let Some(id) = key.strip_prefix(COLOR_PREFIX) {
                    validate_element_id(key, id)?;
                    request
                        .color_replacements
                        .entry(id.to_string())
                        .or_insert(value);
                }
            }
        }
    }

    if let Some(url) = url {
        request
            .text_replacements
            .insert(URL_TEXT_ID.to_string(), escape_html(&url));
    }

    Ok(request)
}

fn validate_element_id(key: &str, id: &str) -> SvgResult<()> {
    if id.is_empty() {
        return Err(SvgError::invalid(key, "missing element id"));
    }

    if let Some(c) = id
        .chars()
        .find(|c| matches!(c, '"' | '<' | '>' | '&') || c.is_whitespace())
    {
        return Err(SvgError::invalid(
            key,
            format!("element id contains {:?}", c),
        ));
    }

    Ok(())
}

/// Escape text for use inside markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
