//! Original geometry extraction and dimension resolution.
//!
//! Width and height requests are resolved against the document's own
//! `width`/`height` attributes. When only one dimension is requested the
//! other one follows the original aspect ratio and the coordinate space
//! (`viewBox`) stays as it was, so `preserveAspectRatio` can reconcile the two.

use crate::markup::{
    insert_root_attribute, root_start_tag, HEIGHT_ATTR, VIEWBOX_ATTR, WIDTH_ATTR,
};
use crate::observer::{SubstitutionEvent, SubstitutionObserver};
use crate::request::EditRequest;
use regex::{Captures, Regex};
use serde::Serialize;

pub const DEFAULT_WIDTH: &str = "809";
pub const DEFAULT_HEIGHT: &str = "370";

/// Geometry read from the document before any edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub width: String,
    pub height: String,
    pub view_box: Option<String>,
}

impl Geometry {
    /// First `width`, `height` and `viewBox` attributes found anywhere in the document.
    pub fn extract(document: &str) -> Self {
        let width = WIDTH_ATTR
            .captures(document)
            .map(|c| c[2].to_string())
            .unwrap_or_else(|| DEFAULT_WIDTH.to_string());
        let height = HEIGHT_ATTR
            .captures(document)
            .map(|c| c[2].to_string())
            .unwrap_or_else(|| DEFAULT_HEIGHT.to_string());
        let view_box = VIEWBOX_ATTR.captures(document).map(|c| c[2].to_string());

        Self {
            width,
            height,
            view_box,
        }
    }

    /// The declared viewBox, or one spanning the extracted width and height.
    ///
    /// A width or height that is not a usable number is replaced by its default.
    pub fn view_box_or_default(&self) -> String {
        self.view_box.clone().unwrap_or_else(|| {
            format!(
                "0 0 {} {}",
                usable_or(&self.width, DEFAULT_WIDTH),
                usable_or(&self.height, DEFAULT_HEIGHT)
            )
        })
    }
}

fn usable_or<'a>(raw: &'a str, default: &'a str) -> &'a str {
    if parse_dimension(raw).is_some() {
        raw
    } else {
        default
    }
}

/// Which number failed to parse when a fallback was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    RequestedWidth,
    RequestedHeight,
    OriginalWidth,
    OriginalHeight,
}

impl Dimension {
    pub fn fallback(self) -> f64 {
        match self {
            Dimension::RequestedWidth => 400.0,
            Dimension::RequestedHeight => 200.0,
            Dimension::OriginalWidth => 809.0,
            Dimension::OriginalHeight => 370.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::RequestedWidth => "width",
            Dimension::RequestedHeight => "height",
            Dimension::OriginalWidth => "original width",
            Dimension::OriginalHeight => "original height",
        }
    }
}

/// Final root attributes to write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDimensions {
    pub width: String,
    pub height: String,
    pub view_box: String,
}

/// Work out the root `width`, `height` and `viewBox` for a request.
///
/// Returns `None` when neither dimension was requested. A requested value
/// that does not parse is replaced by its fallback (400 wide, 200 high)
/// even when both are given, so the written attributes are always numeric.
pub fn resolve_dimensions(
    request: &EditRequest,
    geometry: &Geometry,
    observer: &dyn SubstitutionObserver,
) -> Option<ResolvedDimensions> {
    let resolved = match (request.width.as_deref(), request.height.as_deref()) {
        (None, None) => return None,
        (Some(width), Some(height)) => {
            let (width, _) = requested(width, Dimension::RequestedWidth, observer);
            let (height, _) = requested(height, Dimension::RequestedHeight, observer);
            let view_box = format!("0 0 {} {}", width, height);
            ResolvedDimensions {
                width,
                height,
                view_box,
            }
        }
        (Some(width), None) => {
            let (width, value) = requested(width, Dimension::RequestedWidth, observer);
            let original_width = parse_or_fallback(&geometry.width, Dimension::OriginalWidth, observer);
            let original_height =
                parse_or_fallback(&geometry.height, Dimension::OriginalHeight, observer);
            ResolvedDimensions {
                width,
                height: round_half_up(value * original_height / original_width),
                view_box: geometry.view_box_or_default(),
            }
        }
        (None, Some(height)) => {
            let (height, value) = requested(height, Dimension::RequestedHeight, observer);
            let original_width = parse_or_fallback(&geometry.width, Dimension::OriginalWidth, observer);
            let original_height =
                parse_or_fallback(&geometry.height, Dimension::OriginalHeight, observer);
            ResolvedDimensions {
                width: round_half_up(value * original_width / original_height),
                height,
                view_box: geometry.view_box_or_default(),
            }
        }
    };

    Some(resolved)
}

/// Rewrite every `width`, `height` and `viewBox` attribute in the document.
///
/// Any of the three missing from the root start tag is inserted there, so the
/// root always carries one of each.
pub fn apply_dimensions(document: &str, resolved: &ResolvedDimensions) -> String {
    let svg = rewrite_attribute(document, &WIDTH_ATTR, "width", &resolved.width);
    let svg = rewrite_attribute(&svg, &HEIGHT_ATTR, "height", &resolved.height);
    rewrite_attribute(&svg, &VIEWBOX_ATTR, "viewBox", &resolved.view_box)
}

fn rewrite_attribute(document: &str, pattern: &Regex, name: &str, value: &str) -> String {
    let svg = pattern
        .replace_all(document, |caps: &Captures| {
            format!(r#"{}{}="{}""#, &caps[1], name, value)
        })
        .into_owned();

    let on_root = root_start_tag(&svg).is_some_and(|tag| pattern.is_match(tag));
    if on_root {
        svg
    } else {
        insert_root_attribute(&svg, &format!(r#"{}="{}""#, name, value))
    }
}

/// Requested value as written, or the fallback when it is not a usable number.
fn requested(
    raw: &str,
    dimension: Dimension,
    observer: &dyn SubstitutionObserver,
) -> (String, f64) {
    match parse_dimension(raw) {
        Some(value) => (raw.to_string(), value),
        None => {
            let value = fallback(raw, dimension, observer);
            (round_half_up(value), value)
        }
    }
}

fn parse_or_fallback(raw: &str, dimension: Dimension, observer: &dyn SubstitutionObserver) -> f64 {
    parse_dimension(raw).unwrap_or_else(|| fallback(raw, dimension, observer))
}

fn fallback(raw: &str, dimension: Dimension, observer: &dyn SubstitutionObserver) -> f64 {
    let value = dimension.fallback();
    observer.on_event(&SubstitutionEvent::NumericFallback {
        dimension,
        raw: raw.to_string(),
        fallback: value,
    });
    value
}

/// Positive, finite numbers only.
pub fn parse_dimension(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Round half-up and format without a decimal point.
pub fn round_half_up(value: f64) -> String {
    format!("{}", (value + 0.5).floor() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{NoopObserver, RecordingObserver};

    const LOGO: &str = r#"<svg width="809" height="370"><text id="t"><tspan>Hi</tspan></text></svg>"#;

    #[test]
    fn test_extract_reads_first_attributes() {
        let geometry = Geometry::extract(
            r#"<svg width="100" height="50" viewBox="0 0 10 5"><rect width="3" height="4"/></svg>"#,
        );
        assert_eq!(geometry.width, "100");
        assert_eq!(geometry.height, "50");
        assert_eq!(geometry.view_box.as_deref(), Some("0 0 10 5"));
    }

    #[test]
    fn test_extract_defaults() {
        let geometry = Geometry::extract("<svg></svg>");
        assert_eq!(geometry.width, "809");
        assert_eq!(geometry.height, "370");
        assert_eq!(geometry.view_box, None);
        assert_eq!(geometry.view_box_or_default(), "0 0 809 370");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(182.94), "183");
        assert_eq!(round_half_up(2.5), "3");
        assert_eq!(round_half_up(3.5), "4");
        assert_eq!(round_half_up(7.49), "7");
    }

    #[test]
    fn test_nothing_requested() {
        let geometry = Geometry::extract(LOGO);
        assert_eq!(
            resolve_dimensions(&EditRequest::new(), &geometry, &NoopObserver),
            None
        );
    }

    #[test]
    fn test_width_only_scales_height() {
        let geometry = Geometry::extract(LOGO);
        let request = EditRequest::new().with_width("400");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();

        assert_eq!(resolved.width, "400");
        assert_eq!(resolved.height, "183");
        assert_eq!(resolved.view_box, "0 0 809 370");
    }

    #[test]
    fn test_height_only_scales_width() {
        let geometry = Geometry::extract(LOGO);
        let request = EditRequest::new().with_height("200");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();

        // 200 * 809 / 370 = 437.29
        assert_eq!(resolved.width, "437");
        assert_eq!(resolved.height, "200");
    }

    #[test]
    fn test_single_dimension_keeps_declared_view_box() {
        let geometry = Geometry::extract(r#"<svg width="20" height="10" viewBox="5 5 40 20"></svg>"#);
        let request = EditRequest::new().with_width("40");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();

        assert_eq!(resolved.height, "20");
        assert_eq!(resolved.view_box, "5 5 40 20");
    }

    #[test]
    fn test_both_dimensions_verbatim() {
        let geometry = Geometry::extract(LOGO);
        let request = EditRequest::new().with_width("500").with_height("250.5");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();

        assert_eq!(resolved.width, "500");
        assert_eq!(resolved.height, "250.5");
        assert_eq!(resolved.view_box, "0 0 500 250.5");
    }

    #[test]
    fn test_unparsable_request_uses_fallback() {
        let geometry = Geometry::extract(LOGO);
        let observer = RecordingObserver::new();
        let request = EditRequest::new().with_width("wide");
        let resolved = resolve_dimensions(&request, &geometry, &observer).unwrap();

        assert_eq!(resolved.width, "400");
        assert_eq!(resolved.height, "183");
        assert_eq!(
            observer.events(),
            vec![SubstitutionEvent::NumericFallback {
                dimension: Dimension::RequestedWidth,
                raw: "wide".to_string(),
                fallback: 400.0,
            }]
        );
    }

    #[test]
    fn test_unparsable_original_uses_defaults() {
        let geometry = Geometry::extract(r#"<svg width="100%" height="0"></svg>"#);
        let request = EditRequest::new().with_height("370");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();

        assert_eq!(resolved.width, "809");
        assert_eq!(resolved.view_box, "0 0 809 370");
    }

    #[test]
    fn test_percentage_size_gets_numeric_view_box() {
        let geometry = Geometry::extract(r#"<svg width="100%" height="100%"><g/></svg>"#);
        assert_eq!(geometry.view_box_or_default(), "0 0 809 370");

        let request = EditRequest::new().with_width("400");
        let resolved = resolve_dimensions(&request, &geometry, &NoopObserver).unwrap();
        assert_eq!(resolved.view_box, "0 0 809 370");
        assert_eq!(resolved.height, "183");
    }

    #[test]
    fn test_view_box_keeps_usable_component() {
        let geometry = Geometry::extract(r#"<svg width="120" height="auto"></svg>"#);
        assert_eq!(geometry.view_box_or_default(), "0 0 120 370");
    }

    #[test]
    fn test_apply_rewrites_and_inserts() {
        let resolved = ResolvedDimensions {
            width: "400".to_string(),
            height: "183".to_string(),
            view_box: "0 0 809 370".to_string(),
        };
        let svg = apply_dimensions(LOGO, &resolved);

        assert_eq!(
            svg,
            r#"<svg viewBox="0 0 809 370" width="400" height="183"><text id="t"><tspan>Hi</tspan></text></svg>"#
        );
    }

    #[test]
    fn test_apply_replaces_existing_view_box() {
        let resolved = ResolvedDimensions {
            width: "5".to_string(),
            height: "6".to_string(),
            view_box: "0 0 5 6".to_string(),
        };
        let svg = apply_dimensions(
            r#"<svg viewBox="0 0 1 1" width="1" height="1"><path stroke-width="2"/></svg>"#,
            &resolved,
        );

        assert_eq!(
            svg,
            r#"<svg viewBox="0 0 5 6" width="5" height="6"><path stroke-width="2"/></svg>"#
        );
    }

    #[test]
    fn test_apply_inserts_missing_width_and_height() {
        let resolved = ResolvedDimensions {
            width: "5".to_string(),
            height: "6".to_string(),
            view_box: "0 0 5 6".to_string(),
        };
        let svg = apply_dimensions("<svg><g/></svg>", &resolved);

        assert_eq!(svg, r#"<svg viewBox="0 0 5 6" height="6" width="5"><g/></svg>"#);
    }

    #[test]
    fn test_apply_puts_size_on_root_when_only_children_have_it() {
        let resolved = ResolvedDimensions {
            width: "400".to_string(),
            height: "200".to_string(),
            view_box: "0 0 10 5".to_string(),
        };
        let svg = apply_dimensions(
            r#"<svg viewBox="0 0 10 5"><rect width="3" height="4"/></svg>"#,
            &resolved,
        );

        assert_eq!(
            svg,
            r#"<svg height="200" width="400" viewBox="0 0 10 5"><rect width="400" height="200"/></svg>"#
        );
        let root = root_start_tag(&svg).unwrap();
        assert_eq!(WIDTH_ATTR.find_iter(root).count(), 1);
        assert_eq!(HEIGHT_ATTR.find_iter(root).count(), 1);
        assert_eq!(VIEWBOX_ATTR.find_iter(root).count(), 1);
    }
}
