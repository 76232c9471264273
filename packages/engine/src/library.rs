use crate::engine::Engine;
use crate::error::{SvgError, SvgResult};
use crate::request::EditRequest;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source of raw SVG documents
pub trait DocumentLoader: Send + Sync {
    /// Load a document by file name
    fn load(&self, name: &str) -> SvgResult<String>;

    /// Names of the documents that can be loaded
    fn list(&self) -> SvgResult<Vec<String>>;
}

/// Loads documents from a single directory
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `name` inside the root. Only the last path component is used.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        Path::new(name)
            .file_name()
            .map(|file_name| self.root.join(file_name))
    }
}

impl DocumentLoader for DirectoryLoader {
    fn load(&self, name: &str) -> SvgResult<String> {
        let not_found = || SvgError::DocumentNotFound {
            name: name.to_string(),
        };
        let path = self.resolve(name).ok_or_else(not_found)?;

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
            Err(e) => {
                return Err(SvgError::DocumentReadError {
                    name: name.to_string(),
                    source: e,
                })
            }
        };

        String::from_utf8(bytes).map_err(|e| SvgError::DocumentReadError {
            name: name.to_string(),
            source: std::io::Error::new(ErrorKind::InvalidData, e),
        })
    }

    fn list(&self) -> SvgResult<Vec<String>> {
        list_available(&self.root)
    }
}

/// In-memory documents, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: BTreeMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, document: impl Into<String>) {
        self.documents.insert(name.into(), document.into());
    }

    pub fn with_document(mut self, name: impl Into<String>, document: impl Into<String>) -> Self {
        self.insert(name, document);
        self
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, name: &str) -> SvgResult<String> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| SvgError::DocumentNotFound {
                name: name.to_string(),
            })
    }

    fn list(&self) -> SvgResult<Vec<String>> {
        Ok(self
            .documents
            .keys()
            .filter(|name| name.ends_with(".svg"))
            .cloned()
            .collect())
    }
}

/// Names of the `*.svg` files directly inside `dir`, sorted
pub fn list_available(dir: &Path) -> SvgResult<Vec<String>> {
    let read_error = |source: std::io::Error| SvgError::DocumentReadError {
        name: dir.display().to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".svg") {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

/// Load `name` and apply `request` to it
pub fn render(
    loader: &dyn DocumentLoader,
    engine: &Engine,
    name: &str,
    request: &EditRequest,
) -> SvgResult<String> {
    let document = loader.load(name)?;
    Ok(engine.transform(&document, request))
}
