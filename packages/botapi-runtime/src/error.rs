//! Error types for encoding generated values

use thiserror::Error;

/// Encoding errors. Fatal for the encode call that raised them.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("media of shape {shape} is neither a reference nor uploadable content")]
    UnsupportedMedia { shape: &'static str },

    #[error("media must be attached before it can be encoded")]
    UnnormalizedMedia,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
