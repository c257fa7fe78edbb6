use thiserror::Error;

/// Errors raised while building or updating an offstage configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown transition kind `{0}` (expected fade, scale, fadeAndScale, slide or rotation)")]
    UnknownTransition(String),

    #[error("unknown slide direction `{0}` (expected up, down, left or right)")]
    UnknownSlideDirection(String),

    #[error("slide offset must be a finite, non-negative fraction, got {0}")]
    InvalidSlideOffset(f32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
