//! Errors raised at the edges of the notation compiler.
//!
//! Tree construction itself never fails. These errors only appear where text is decoded, where a
//! name is looked up, or where markup is written, and the calling layer is expected to degrade
//! them into a fallback rendering.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotationError {
    #[error("invalid precedence list: {0}")]
    InvalidPrecedence(#[from] serde_json::Error),

    #[error("invalid emitter configuration: {0}")]
    InvalidConfig(serde_json::Error),

    #[error("unknown notation family: {0}")]
    UnknownFamily(String),

    #[error("unknown emitter: {0}")]
    UnknownEmitter(String),

    #[error("failed to write markup")]
    Emit(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, NotationError>;
