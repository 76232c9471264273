use crate::markup::insert_root_attribute;

pub const PRESERVE_ASPECT_RATIO: &str = "xMidYMid meet";

/// Add `preserveAspectRatio` to the root unless the document already has one
pub fn ensure_preserve_aspect_ratio(document: &str) -> String {
    if document.contains("preserveAspectRatio") {
        return document.to_string();
    }

    insert_root_attribute(
        document,
        &format!(r#"preserveAspectRatio="{}""#, PRESERVE_ASPECT_RATIO),
    )
}
