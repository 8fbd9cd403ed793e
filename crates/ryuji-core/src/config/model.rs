use serde::{Deserialize, Serialize};

use super::consts::{DEFAULT_COMPONENTS_ROOT, DEFAULT_FILE_EXTENSION, DEFAULT_TEMPLATES_ROOT};
use crate::error::{Result, RyujiError};
use crate::template::RenderConfig;

/// ryuji.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Where template and component sources live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_templates_root")]
    pub templates_root: String,
    #[serde(default = "default_components_root")]
    pub components_root: String,
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            templates_root: default_templates_root(),
            components_root: default_components_root(),
            file_extension: default_file_extension(),
        }
    }
}

fn default_templates_root() -> String {
    DEFAULT_TEMPLATES_ROOT.to_string()
}

fn default_components_root() -> String {
    DEFAULT_COMPONENTS_ROOT.to_string()
}

fn default_file_extension() -> String {
    DEFAULT_FILE_EXTENSION.to_string()
}

impl Config {
    /// Read and validate ryuji.toml
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| RyujiError::ConfigParseError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate ryuji.toml contents
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| RyujiError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write ryuji.toml
    pub fn to_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RyujiError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(RyujiError::IoError)?;

        Ok(())
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<()> {
        let ext = &self.paths.file_extension;
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(RyujiError::ConfigInvalidValue {
                field: "paths.file_extension".to_string(),
                reason: format!("'{}' must start with '.' followed by a name", ext),
            });
        }
        if ext.contains('/') {
            return Err(RyujiError::ConfigInvalidValue {
                field: "paths.file_extension".to_string(),
                reason: format!("'{}' must not contain a path separator", ext),
            });
        }
        Ok(())
    }

    /// Settings handed to the renderer
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            templates_root: self.paths.templates_root.clone(),
            components_root: self.paths.components_root.clone(),
            file_extension: self.paths.file_extension.clone(),
        }
    }
}
