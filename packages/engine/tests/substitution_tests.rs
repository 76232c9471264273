/// End-to-end substitution tests against a real-world shaped fixture
use svgweb_engine::{decode_query, survey, transform, EditRequest, Geometry};

const BASIC_AUTH: &str = include_str!("../../../static/svg/basic-auth.svg");
const XMLNS: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

fn root_tag(svg: &str) -> &str {
    let end = svg.find('>').expect("root tag");
    &svg[..=end]
}

#[test]
fn test_spec_example_width() {
    let input = r#"<svg width="809" height="370"><text id="t"><tspan>Hi</tspan></text></svg>"#;
    let out = transform(input, &EditRequest::new().with_width("400"));

    assert!(out.contains(r#"width="400" height="183""#));
    assert!(out.contains("<tspan>Hi</tspan>"));
}

#[test]
fn test_spec_example_text() {
    let input = r#"<svg width="809" height="370"><text id="t"><tspan>Hi</tspan></text></svg>"#;
    let out = transform(input, &EditRequest::new().with_text("t", "Bye"));
    assert!(out.contains("<tspan>Bye</tspan>"));
}

#[test]
fn test_width_only_preserves_ratio() {
    for width in ["100", "321", "400", "1000", "1618"] {
        let out = transform(BASIC_AUTH, &EditRequest::new().with_width(width));
        let geometry = Geometry::extract(&out);

        let w: f64 = geometry.width.parse().unwrap();
        let h: f64 = geometry.height.parse().unwrap();
        assert_eq!(geometry.width, width);
        assert!((h - w * 370.0 / 809.0).abs() <= 1.0, "{} x {}", w, h);
        assert_eq!(geometry.view_box.as_deref(), Some("0 0 809 370"));
    }
}

#[test]
fn test_height_only_preserves_ratio() {
    for height in ["50", "185", "200", "999"] {
        let out = transform(BASIC_AUTH, &EditRequest::new().with_height(height));
        let geometry = Geometry::extract(&out);

        let w: f64 = geometry.width.parse().unwrap();
        let h: f64 = geometry.height.parse().unwrap();
        assert!((w - h * 809.0 / 370.0).abs() <= 1.0, "{} x {}", w, h);
    }
}

#[test]
fn test_both_dimensions_set_view_box() {
    let out = transform(
        BASIC_AUTH,
        &EditRequest::new().with_width("500").with_height("250"),
    );
    let root = root_tag(&out);

    assert!(root.contains(r#"viewBox="0 0 500 250""#));
    assert_eq!(root.matches(" width=").count(), 1);
    assert_eq!(root.matches(" height=").count(), 1);
    assert_eq!(root.matches("viewBox=").count(), 1);
    assert!(root.contains(r#"preserveAspectRatio="xMidYMid meet""#));
}

#[test]
fn test_stroke_width_survives_scaling() {
    let out = transform(BASIC_AUTH, &EditRequest::new().with_width("400"));
    assert!(out.contains(r#"stroke-width="1""#));
}

#[test]
fn test_duplicate_namespace_repaired() {
    assert_eq!(BASIC_AUTH.matches(XMLNS).count(), 2);

    let out = transform(BASIC_AUTH, &EditRequest::new());
    assert_eq!(out.matches(XMLNS).count(), 1);
    assert!(root_tag(&out).contains(XMLNS));
}

#[test]
fn test_transform_twice_is_stable() {
    let request = EditRequest::new()
        .with_width("400")
        .with_text("text-title", "Welcome")
        .with_color("page-background", "#000000");

    let once = transform(BASIC_AUTH, &request);
    let twice = transform(&once, &request);

    assert_eq!(twice.matches("preserveAspectRatio").count(), 1);
    assert_eq!(twice.matches(XMLNS).count(), 1);
    assert_eq!(twice, once);
}

#[test]
fn test_text_and_colors_together() {
    let request = decode_query([
        ("text.text-title", "Welcome back"),
        ("text.btn-label", "Continue"),
        ("url", "docs.rs/?a=1&b=2"),
        ("color.page-background", "#f0f9ff"),
        ("color.btn-background_2", "#0ea5e9"),
    ])
    .unwrap();
    let out = transform(BASIC_AUTH, &request);

    assert!(out.contains(r#"<tspan x="280" y="100">Welcome back</tspan>"#));
    assert!(out.contains(r#"font-size="14" x="456" y="273">Continue</text>"#));
    assert!(out.contains(r#"<tspan x="280" y="124">docs.rs/?a=1&amp;b=2</tspan>"#));
    assert!(out.contains(r##"<rect id="page-background" width="809" height="370" rx="8" fill="#f0f9ff"/>"##));
    assert!(out.contains(r##"fill="#0ea5e9""##));
    // the group has no fill of its own
    assert!(out.contains(r#"<g id="btn">"#));
}

#[test]
fn test_unknown_ids_leave_document_alone() {
    let request = EditRequest::new()
        .with_text("no-such-text", "x")
        .with_color("no-such-rect", "#fff")
        .with_color("input-username", "#fff");

    assert_eq!(transform(BASIC_AUTH, &EditRequest::new()), transform(BASIC_AUTH, &request));
}

#[test]
fn test_survey_of_fixture() {
    let elements = survey(BASIC_AUTH);
    let ids: Vec<_> = elements.iter().map(|e| e.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "page-background",
            "prompt-background",
            "text-title",
            "text-url",
            "input-username",
            "input-password",
            "btn",
            "btn-background_2",
            "btn-label",
        ]
    );
    assert_eq!(elements[2].text.as_deref(), Some("Sign in"));
}
