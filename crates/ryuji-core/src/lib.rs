// Core modules
pub mod config;
pub mod error;
pub mod path;
pub mod template;

// Re-export commonly used types
pub use error::{Result, RyujiError};
pub use template::{render, Context, RenderConfig, Renderer, TemplateError, Value};
