//! Error types for reading sequences

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while turning text into a sequence
#[derive(Debug, Error)]
pub enum InputError {
    #[error("value #{index} ({token:?}) is not an integer: {source}")]
    InvalidValue {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("value #{index} ({token}) does not fit in a 32-bit signed integer")]
    OutOfRange { index: usize, token: String },
}

/// Errors from installing the log subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}
