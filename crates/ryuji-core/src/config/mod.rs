//! Renderer configuration (`ryuji.toml`) and fixed engine limits

pub mod consts;
mod model;

pub use model::{Config, PathsConfig};
