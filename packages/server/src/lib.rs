//! HTTP service for customizable SVG images.
//!
//! Routes:
//! - `GET /` usage guide
//! - `GET /list` available SVG names, one per line
//! - `GET /ui/{name}` the named SVG with query edits applied
//! - `GET /debug?svg={name}` inspection page for one SVG, previewing any query edits

pub mod config;
pub mod error;
pub mod pages;
pub mod routes;

pub use config::{Config, ServeArgs, Settings};
pub use error::ServeError;
pub use routes::{router, AppState};
