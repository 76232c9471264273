//! Hooks for reporting what a transform did.
//!
//! The engine never logs through a global; it reports to the observer it was
//! built with. [`TracingObserver`] turns events into `tracing` records and
//! [`RecordingObserver`] keeps them for inspection, summarized as a
//! [`TransformReport`].

use crate::geometry::{Dimension, Geometry, ResolvedDimensions};
use crate::text::TextStrategy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Something worth reporting during a transform.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstitutionEvent {
    NamespaceRepaired { declarations: usize },
    GeometryExtracted(Geometry),
    NumericFallback {
        dimension: Dimension,
        raw: String,
        fallback: f64,
    },
    DimensionsResolved(ResolvedDimensions),
    TextReplaced {
        element_id: String,
        strategy: TextStrategy,
    },
    TextSkipped { element_id: String },
    ColorReplaced { element_id: String, tags: usize },
    ColorSkipped { element_id: String },
    Finished { bytes: usize },
}

/// Receives events from the substitution pipeline
pub trait SubstitutionObserver: Send + Sync {
    fn on_event(&self, _event: &SubstitutionEvent) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SubstitutionObserver for NoopObserver {}

/// Observer that forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SubstitutionObserver for TracingObserver {
    fn on_event(&self, event: &SubstitutionEvent) {
        match event {
            SubstitutionEvent::NamespaceRepaired { declarations } => {
                tracing::debug!(declarations, "collapsed duplicate xmlns declarations");
            }
            SubstitutionEvent::GeometryExtracted(geometry) => {
                tracing::debug!(
                    width = %geometry.width,
                    height = %geometry.height,
                    view_box = ?geometry.view_box,
                    "extracted original geometry"
                );
            }
            SubstitutionEvent::NumericFallback {
                dimension,
                raw,
                fallback,
            } => {
                tracing::warn!(
                    dimension = dimension.as_str(),
                    raw = %raw,
                    fallback,
                    "could not parse dimension, using fallback"
                );
            }
            SubstitutionEvent::DimensionsResolved(resolved) => {
                tracing::debug!(
                    width = %resolved.width,
                    height = %resolved.height,
                    view_box = %resolved.view_box,
                    "resolved dimensions"
                );
            }
            SubstitutionEvent::TextReplaced {
                element_id,
                strategy,
            } => {
                tracing::debug!(element_id = %element_id, strategy = ?strategy, "replaced text");
            }
            SubstitutionEvent::TextSkipped { element_id } => {
                tracing::warn!(element_id = %element_id, "no text pattern matched");
            }
            SubstitutionEvent::ColorReplaced { element_id, tags } => {
                tracing::debug!(element_id = %element_id, tags, "replaced fill color");
            }
            SubstitutionEvent::ColorSkipped { element_id } => {
                tracing::debug!(element_id = %element_id, "no tag with this id carries a fill");
            }
            SubstitutionEvent::Finished { bytes } => {
                tracing::debug!(bytes, "transform finished");
            }
        }
    }
}

/// Observer that keeps every event, in order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SubstitutionEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SubstitutionEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn report(&self) -> TransformReport {
        TransformReport::from_events(&self.events())
    }
}

impl SubstitutionObserver for RecordingObserver {
    fn on_event(&self, event: &SubstitutionEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

/// A fallback value used in place of an unparsable number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackUsed {
    pub dimension: Dimension,
    pub raw: String,
    pub fallback: f64,
}

/// Summary of one transform, folded from its events.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformReport {
    /// Number of `xmlns` declarations collapsed, when there were duplicates
    pub namespace_repaired: Option<usize>,
    pub geometry: Option<Geometry>,
    pub fallbacks: Vec<FallbackUsed>,
    pub dimensions: Option<ResolvedDimensions>,
    pub texts_replaced: BTreeMap<String, TextStrategy>,
    pub texts_skipped: Vec<String>,

    /// Element id -> number of tags rewritten
    pub colors_replaced: BTreeMap<String, usize>,
    pub colors_skipped: Vec<String>,

    /// Size of the output, once the transform finished
    pub output_bytes: Option<usize>,
}

impl TransformReport {
    pub fn from_events(events: &[SubstitutionEvent]) -> Self {
        let mut report = Self::default();
        for event in events {
            match event {
                SubstitutionEvent::NamespaceRepaired { declarations } => {
                    report.namespace_repaired = Some(*declarations);
                }
                SubstitutionEvent::GeometryExtracted(geometry) => {
                    report.geometry = Some(geometry.clone());
                }
                SubstitutionEvent::NumericFallback {
                    dimension,
                    raw,
                    fallback,
                } => report.fallbacks.push(FallbackUsed {
                    dimension: *dimension,
                    raw: raw.clone(),
                    fallback: *fallback,
                }),
                SubstitutionEvent::DimensionsResolved(resolved) => {
                    report.dimensions = Some(resolved.clone());
                }
                SubstitutionEvent::TextReplaced {
                    element_id,
                    strategy,
                } => {
                    report.texts_replaced.insert(element_id.clone(), *strategy);
                }
                SubstitutionEvent::TextSkipped { element_id } => {
                    report.texts_skipped.push(element_id.clone());
                }
                SubstitutionEvent::ColorReplaced { element_id, tags } => {
                    report.colors_replaced.insert(element_id.clone(), *tags);
                }
                SubstitutionEvent::ColorSkipped { element_id } => {
                    report.colors_skipped.push(element_id.clone());
                }
                SubstitutionEvent::Finished { bytes } => report.output_bytes = Some(*bytes),
            }
        }
        report
    }
}
