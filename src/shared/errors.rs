use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("Browser window unavailable")]
    WindowUnavailable,

    #[error("Document unavailable")]
    DocumentUnavailable,

    #[error("Media query unsupported: {0}")]
    MediaQueryUnsupported(String),

    #[error("Event listener error: {0}")]
    ListenerError(String),

    #[error("DOM error: {0}")]
    DomError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
