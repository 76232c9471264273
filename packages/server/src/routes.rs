use crate::error::ServeError;
use crate::pages::{debug_page, INDEX_HTML};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use svgweb_engine::{decode_query, render, DocumentLoader, Engine, RecordingObserver};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<dyn DocumentLoader>,
    pub engine: Engine,
}

impl AppState {
    pub fn new(loader: Arc<dyn DocumentLoader>) -> Self {
        Self {
            loader,
            engine: Engine::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/list", get(list_handler))
        .route("/ui/*name", get(svg_handler))
        .route("/debug", get(debug_handler))
        .fallback(not_found_handler)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Plain-text list of the available SVGs, one per line
async fn list_handler(State(state): State<Arc<AppState>>) -> Result<Response, ServeError> {
    let names = state.loader.list()?;
    tracing::info!(count = names.len(), "listed SVG files");

    let mut body = String::new();
    for name in &names {
        body.push_str(name);
        body.push('\n');
    }

    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// Serve one SVG with the query's edits applied
async fn svg_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ServeError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");
    tracing::info!(svg = %name, user_agent, "SVG request");

    let Query(pairs) = query.map_err(|e| ServeError::InvalidQuery(e.body_text()))?;
    let request = decode_query(pairs)?;

    let svg = render(state.loader.as_ref(), &state.engine, &name, &request)?;
    tracing::info!(svg = %name, bytes = svg.len(), "processed SVG");

    let mut response = svg.into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(SVG_CONTENT_TYPE));
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    Ok(response)
}

/// Inspect one SVG; any edit parameters besides `svg` are previewed with a report
async fn debug_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, ServeError> {
    let Query(pairs) = query.map_err(|e| ServeError::InvalidQuery(e.body_text()))?;
    let name = pairs
        .iter()
        .find(|(key, value)| key == "svg" && !value.is_empty())
        .map(|(_, value)| value.clone())
        .ok_or(ServeError::MissingParameter("svg"))?;
    let request = decode_query(pairs)?;

    let document = state.loader.load(&name)?;
    let recorder = Arc::new(RecordingObserver::new());
    let preview = Engine::with_observer(recorder.clone()).transform(&document, &request);
    let report = serde_json::to_string_pretty(&recorder.report())?;

    Ok(Html(debug_page(&name, &document, &preview, &report)))
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
