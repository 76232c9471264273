use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use svgweb_engine::SvgError;
use thiserror::Error;

/// Failures surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ServeError {
    #[error(transparent)]
    Svg(#[from] SvgError),

    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    #[error("Invalid parameters: {0}")]
    InvalidQuery(String),

    #[error("Could not build transform report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ServeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServeError::Svg(SvgError::DocumentNotFound { .. }) => StatusCode::NOT_FOUND,
            ServeError::Svg(SvgError::DocumentReadError { .. }) | ServeError::Report(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServeError::Svg(SvgError::InvalidRequestEncoding { .. })
            | ServeError::MissingParameter(_)
            | ServeError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::info!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, self.to_string()).into_response()
    }
}
