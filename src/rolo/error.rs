use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Group choice out of range: {0}")]
    InvalidChoice(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
