use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected payload: {0}")]
    Format(String),

    #[error("could not open url: {0}")]
    Open(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
