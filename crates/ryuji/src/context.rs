//! Global context for CLI commands

use anyhow::{anyhow, bail, Context as _, Result};
use ryuji_core::config::{consts::CONFIG_FILE_NAME, Config};
use ryuji_core::{Context, Renderer};
use std::env;
use std::path::{Path, PathBuf};

/// Loaded configuration shared by all commands
pub struct AppContext {
    pub config: Config,
    pub verbose: bool,
}

impl AppContext {
    /// Load the configuration
    ///
    /// An explicit `config_path` must exist. Without one, `./ryuji.toml` is used
    /// when present and defaults apply otherwise.
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => {
                let default_path = env::current_dir()?.join(CONFIG_FILE_NAME);
                if default_path.exists() {
                    log::debug!("using config {}", default_path.display());
                    Config::from_file(&default_path)?
                } else {
                    log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    Config::default()
                }
            }
        };

        Ok(Self { config, verbose })
    }

    /// Renderer reading sources from the configured roots
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.config.render_config())
    }
}

/// Load template variables from a `.json` or `.toml` file
///
/// No file means an empty context.
pub fn load_vars(path: Option<&Path>) -> Result<Context> {
    let Some(path) = path else {
        return Ok(Context::new());
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read vars file {}: {}", path.display(), e))?;

    let vars = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Context::from_json_str(&text)?,
        Some("toml") => Context::from_toml_str(&text)?,
        _ => bail!(
            "Unsupported vars file {}: expected .json or .toml",
            path.display()
        ),
    };

    if vars.is_empty() {
        log::warn!("vars file {} defines no variables", path.display());
    } else {
        log::debug!("loaded {} variable(s) from {}", vars.len(), path.display());
    }
    Ok(vars)
}
