//! Text replacement by element id.
//!
//! There is no DOM here. Three patterns are tried in order and the first one
//! that actually changes the document wins:
//!
//! 1. `<text id="…"><tspan>…</tspan>`: only the tspan content is replaced
//! 2. `<text id="…">…</text>` with no child element
//! 3. any `<text … id="…" …>…</text>` on one line, replacing the first tspan
//!    content inside it, or the whole content when there is no tspan

use crate::markup::{id_pattern, TSPAN_CONTENT};
use regex::{Captures, Regex};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStrategy {
    TspanNested,
    Direct,
    General,
}

const TSPAN_NESTED: &str = r#"(<text id="{id}"[^>]*>[ \t\n\r]*<tspan[^>]*>)[^<]*(</tspan>)"#;
const DIRECT: &str = r#"(<text id="{id}"[^>]*>)[^<]*(</text>)"#;
const GENERAL: &str = r#"<text[^>]*\sid="{id}"[^>]*>(.*?)</text>"#;

/// Replace the rendered text of the element with `id`.
///
/// Returns the new document and the strategy that applied, or the input
/// unchanged and `None` when nothing matched.
pub fn substitute_text(
    document: &str,
    id: &str,
    new_text: &str,
) -> (String, Option<TextStrategy>) {
    if let Some(svg) = id_pattern(TSPAN_NESTED, id)
        .and_then(|re| replace_between(&re, document, new_text))
    {
        return (svg, Some(TextStrategy::TspanNested));
    }

    if let Some(svg) = id_pattern(DIRECT, id).and_then(|re| replace_between(&re, document, new_text))
    {
        return (svg, Some(TextStrategy::Direct));
    }

    if let Some(svg) = id_pattern(GENERAL, id).and_then(|re| replace_general(&re, document, new_text))
    {
        return (svg, Some(TextStrategy::General));
    }

    (document.to_string(), None)
}

/// Keep groups 1 and 2 and put `new_text` between them, for every match.
fn replace_between(re: &Regex, document: &str, new_text: &str) -> Option<String> {
    if !re.is_match(document) {
        return None;
    }

    let svg = re
        .replace_all(document, |caps: &Captures| {
            format!("{}{}{}", &caps[1], new_text, &caps[2])
        })
        .into_owned();

    (svg != document).then_some(svg)
}

fn replace_general(re: &Regex, document: &str, new_text: &str) -> Option<String> {
    let inner = re.captures(document)?.get(1)?;

    let range = match TSPAN_CONTENT.captures(inner.as_str()).and_then(|c| c.get(1)) {
        Some(tspan) => inner.start() + tspan.start()..inner.start() + tspan.end(),
        None => inner.range(),
    };

    let mut svg = String::with_capacity(document.len() + new_text.len());
    svg.push_str(&document[..range.start]);
    svg.push_str(new_text);
    svg.push_str(&document[range.end..]);

    (svg != document).then_some(svg)
}
