use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown section category: {0}")]
    UnknownCategory(String),
    #[error("unknown session kind: {0}")]
    UnknownSessionKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
