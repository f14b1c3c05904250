#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
