use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("page index {found} at position {position} (pages must be numbered 0..n without gaps)")]
    PageIndex { position: usize, found: usize },
    #[error("invalid option {option}: {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
