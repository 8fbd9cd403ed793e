//! Template source loading
//!
//! The renderer never touches storage directly; it asks a [`SourceLoader`] for
//! the text behind a resolved path such as `components/header.html`.

use std::collections::HashMap;
use std::path::PathBuf;

use super::error::TemplateError;

/// Provides raw template text for a resolved source path
pub trait SourceLoader {
    fn load(&self, path: &str) -> Result<String, TemplateError>;
}

/// Reads sources from the filesystem, relative to an optional base directory
#[derive(Debug, Clone, Default)]
pub struct FsLoader {
    base: Option<PathBuf>,
}

impl FsLoader {
    /// Resolve paths as given (relative to the working directory)
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base`
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl SourceLoader for FsLoader {
    fn load(&self, path: &str) -> Result<String, TemplateError> {
        let full = match &self.base {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        };
        log::debug!("loading template source {}", full.display());
        std::fs::read_to_string(&full).map_err(|e| TemplateError::SourceUnavailable {
            path: full.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// In-memory sources keyed by resolved path
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    sources: HashMap<String, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `text` under `path` (e.g. `components/header.html`)
    pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.sources.insert(path.into(), text.into());
        self
    }
}

impl SourceLoader for MemoryLoader {
    fn load(&self, path: &str) -> Result<String, TemplateError> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| TemplateError::SourceUnavailable {
                path: path.to_string(),
                reason: "no such source".to_string(),
            })
    }
}
