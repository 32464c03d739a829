use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown canonical column: {0}")]
    UnknownColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
