//! # svgweb-engine
//!
//! Customizes SVG markup from request parameters: text by element id, fill
//! colors by element id, and target width/height. The markup is edited as
//! text with layered patterns, never parsed into a tree.
//!
//! ```rust
//! use svgweb_engine::{transform, EditRequest};
//!
//! let svg = r#"<svg width="809" height="370"><text id="t"><tspan>Hi</tspan></text></svg>"#;
//! let request = EditRequest::new().with_width("400").with_text("t", "Bye");
//!
//! let out = transform(svg, &request);
//! assert!(out.contains(r#"width="400" height="183""#));
//! assert!(out.contains("<tspan>Bye</tspan>"));
//! ```

pub mod aspect;
pub mod color;
pub mod decode;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod library;
pub mod markup;
pub mod namespace;
pub mod observer;
pub mod request;
pub mod survey;
pub mod text;

pub use decode::{decode_query, escape_html, URL_TEXT_ID};
pub use engine::{transform, Engine};
pub use error::{SvgError, SvgResult};
pub use geometry::{Geometry, ResolvedDimensions};
pub use library::{list_available, render, DirectoryLoader, DocumentLoader, MemoryLoader};
pub use observer::{
    NoopObserver, RecordingObserver, SubstitutionEvent, SubstitutionObserver, TracingObserver,
    TransformReport,
};
pub use request::EditRequest;
pub use survey::{survey, ElementSummary};
pub use text::TextStrategy;
