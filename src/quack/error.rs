use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuackError {
    #[error("Unknown bang: !{0}")]
    UnknownBang(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, QuackError>;
