//! Unified error type for drawpad.

use thiserror::Error;

/// Errors raised while building drawables or rendering them.
#[derive(Debug, Error)]
pub enum PadError {
    /// Invalid argument (empty designator, malformed placement, bad option).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No resolution stage produced a fully decoded image.
    #[error("Image '{designator}' not found")]
    ResourceNotFound {
        /// The designator as supplied by the caller.
        designator: String,
    },

    /// The decoded image reported unusable dimensions.
    #[error("Image '{designator}' is corrupt ({width}x{height})")]
    CorruptResource {
        /// The designator as supplied by the caller.
        designator: String,
        /// Decoded width.
        width: f64,
        /// Decoded height.
        height: f64,
    },

    /// The canvas context rejected a drawing operation.
    #[error("Canvas error: {0}")]
    Canvas(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// The rendered surface could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_designator() {
        let err = PadError::ResourceNotFound { designator: "missing/ghost.png".into() };
        assert!(err.to_string().contains("missing/ghost.png"));
    }

    #[test]
    fn corrupt_message_carries_dimensions() {
        let err =
            PadError::CorruptResource { designator: "bad.png".into(), width: -1.0, height: 4.0 };
        let msg = err.to_string();
        assert!(msg.contains("bad.png"));
        assert!(msg.contains("-1x4"));
    }
}
