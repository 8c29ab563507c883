use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrixError {
    #[error("Attribute error: {0}")]
    Attribute(String),

    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("Mesh construction error: {0}")]
    MeshConstruction(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BrixError>;
