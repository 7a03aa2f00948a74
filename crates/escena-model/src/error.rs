use thiserror::Error;

/// Errors raised when constructing model values from untrusted text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    #[error("unknown taxonomy domain: {0}")]
    UnknownDomain(String),

    #[error("invalid locale tag: '{0}'")]
    InvalidLocale(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
