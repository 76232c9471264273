use crate::markup::{id_pattern, FILL_ATTR};
use regex::Captures;

/// One start tag carrying `id="{id}"`, attributes in any order.
const TAG_WITH_ID: &str = r#"<[^<>]*\sid="{id}"[^>]*>"#;

/// Rewrite the `fill` of every tag whose `id` is `id`.
///
/// The `fill` may come before or after the id. Tags without one are left
/// alone; no attribute is added. Returns the number of tags rewritten.
pub fn substitute_color(document: &str, id: &str, color: &str) -> (String, usize) {
    let Some(re) = id_pattern(TAG_WITH_ID, id) else {
        return (document.to_string(), 0);
    };

    let mut tags = 0;
    let svg = re
        .replace_all(document, |caps: &Captures| {
            let tag = &caps[0];
            if !FILL_ATTR.is_match(tag) {
                return tag.to_string();
            }
            tags += 1;
            FILL_ATTR
                .replace_all(tag, |fill: &Captures| format!(r#"{}fill="{}""#, &fill[1], color))
                .into_owned()
        })
        .into_owned();

    if tags == 0 {
        return (document.to_string(), 0);
    }
    (svg, tags)
}
