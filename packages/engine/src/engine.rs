use crate::aspect::ensure_preserve_aspect_ratio;
use crate::color::substitute_color;
use crate::geometry::{apply_dimensions, resolve_dimensions, Geometry};
use crate::namespace::{count_namespace_declarations, normalize_namespace};
use crate::observer::{SubstitutionEvent, SubstitutionObserver, TracingObserver};
use crate::request::EditRequest;
use crate::text::substitute_text;
use std::sync::Arc;

/// Runs the substitution pipeline over a loaded document.
///
/// Stages run in a fixed order since each one can change what the next one
/// matches: namespace, geometry, dimensions, text, color, aspect ratio.
#[derive(Clone)]
pub struct Engine {
    observer: Arc<dyn SubstitutionObserver>,
}

impl Engine {
    /// Engine that reports through `tracing`
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn SubstitutionObserver>) -> Self {
        Self { observer }
    }

    pub fn transform(&self, document: &str, request: &EditRequest) -> String {
        let observer = self.observer.as_ref();

        let declarations = count_namespace_declarations(document);
        let mut svg = normalize_namespace(document);
        if declarations > 1 {
            observer.on_event(&SubstitutionEvent::NamespaceRepaired { declarations });
        }

        let geometry = Geometry::extract(&svg);
        observer.on_event(&SubstitutionEvent::GeometryExtracted(geometry.clone()));

        if let Some(resolved) = resolve_dimensions(request, &geometry, observer) {
            svg = apply_dimensions(&svg, &resolved);
            observer.on_event(&SubstitutionEvent::DimensionsResolved(resolved));
        }

        for (element_id, new_text) in &request.text_replacements {
            let (next, strategy) = substitute_text(&svg, element_id, new_text);
            match strategy {
                Some(strategy) => {
                    svg = next;
                    observer.on_event(&SubstitutionEvent::TextReplaced {
                        element_id: element_id.clone(),
                        strategy,
                    });
                }
                None => observer.on_event(&SubstitutionEvent::TextSkipped {
                    element_id: element_id.clone(),
                }),
            }
        }

        for (element_id, color) in &request.color_replacements {
            let (next, tags) = substitute_color(&svg, element_id, color);
            if tags > 0 {
                svg = next;
                observer.on_event(&SubstitutionEvent::ColorReplaced {
                    element_id: element_id.clone(),
                    tags,
                });
            } else {
                observer.on_event(&SubstitutionEvent::ColorSkipped {
                    element_id: element_id.clone(),
                });
            }
        }

        if request.has_dimensions() {
            svg = ensure_preserve_aspect_ratio(&svg);
        }

        let svg = svg.trim().to_string();
        observer.on_event(&SubstitutionEvent::Finished { bytes: svg.len() });
        svg
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

/// Transform with the default tracing-backed engine
pub fn transform(document: &str, request: &EditRequest) -> String {
    Engine::new().transform(document, request)
}
