use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("SVG file {name} not found")]
    DocumentNotFound { name: String },

    #[error("failed to read SVG file {name}: {source}")]
    DocumentReadError {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter {key}: {reason}")]
    InvalidRequestEncoding { key: String, reason: String },
}

pub type SvgResult<T> = Result<T, SvgError>;

impl SvgError {
    pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SvgError::InvalidRequestEncoding {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
