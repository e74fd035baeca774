use thiserror::Error;

/// Rejected particle field parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("particle count must be non-zero")]
    Empty,
    #[error("field extent must be a positive finite number, got {0}")]
    InvalidExtent(f32),
}

/// Rejected scene configuration, usually read from canvas `data-*` attributes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown follow mode `{0}` (expected `pointer` or `drift`)")]
    UnknownFollowMode(String),
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
    #[error(transparent)]
    Field(#[from] FieldError),
}
