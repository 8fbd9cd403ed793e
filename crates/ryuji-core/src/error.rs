use thiserror::Error;

#[derive(Error, Debug)]
pub enum RyujiError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Context errors
    #[error("CONTEXT_INVALID: {0}")]
    ContextInvalid(String),

    // Template errors
    #[error("TEMPLATE_ERROR: {0}")]
    Template(#[from] crate::template::error::TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for RyujiError {
    fn from(err: serde_json::Error) -> Self {
        RyujiError::ContextInvalid(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, RyujiError>;
