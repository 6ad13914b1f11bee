use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bug not found: {0}")]
    NotFound(String),

    #[error("Registry lock error")]
    Lock,
}

pub type Result<T> = std::result::Result<T, RegistryError>;
