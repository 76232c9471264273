use crate::markup::insert_root_attribute;

pub const SVG_NAMESPACE_DECL: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

pub fn count_namespace_declarations(document: &str) -> usize {
    document.matches(SVG_NAMESPACE_DECL).count()
}

/// Collapse repeated SVG namespace declarations into one on the root element.
///
/// Zero or one declaration is left alone.
pub fn normalize_namespace(document: &str) -> String {
    if count_namespace_declarations(document) <= 1 {
        return document.to_string();
    }

    let stripped = document.replace(SVG_NAMESPACE_DECL, "");
    insert_root_attribute(&stripped, SVG_NAMESPACE_DECL)
}
