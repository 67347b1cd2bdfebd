//! Error types for the mosaic engine.
//!
//! Layout computation itself never fails: degenerate geometry yields an empty
//! result. Errors only arise where callers hand the engine identities or text
//! it cannot resolve.
//!
//! # Error Categories
//!
//! - **Lookup errors**: a tile identity is not tracked by the position map
//! - **Input errors**: duplicate identities, malformed route segments,
//!   unusable request dimensions
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mosaic::error::{MosaicError, MosaicResult};
//!
//! fn promote(positions: &mut PositionMap, id: &str) -> MosaicResult<()> {
//!     let primary = positions.id_at(0).ok_or(MosaicError::EmptyPositions)?;
//!     positions.swap(id, &primary)
//! }
//! ```

use thiserror::Error;

/// Result type alias for mosaic operations.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Errors that can occur in position, routing or request handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    /// A tile identity is not present in the position map.
    #[error("Tile '{0}' not found")]
    TileNotFound(String),

    /// The position map has no tiles.
    #[error("No tiles are positioned")]
    EmptyPositions,

    /// The same identity appeared twice where identities must be unique.
    #[error("Tile '{0}' listed more than once")]
    DuplicateTile(String),

    /// A route path segment could not be decoded.
    #[error("Invalid path segment '{segment}': {reason}")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Request dimensions were not finite numbers.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl MosaicError {
    /// Creates an invalid segment error.
    #[must_use]
    pub fn invalid_segment(segment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSegment {
            segment: segment.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions(message.into())
    }

    /// Returns `true` if this error indicates an identity was not found.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TileNotFound(_) | Self::EmptyPositions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            MosaicError::TileNotFound("shroud".to_string()).to_string(),
            "Tile 'shroud' not found"
        );
        assert_eq!(
            MosaicError::DuplicateTile("a".to_string()).to_string(),
            "Tile 'a' listed more than once"
        );
        assert_eq!(
            MosaicError::invalid_segment("~yt", "empty identity").to_string(),
            "Invalid path segment '~yt': empty identity"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(MosaicError::TileNotFound("x".into()).is_not_found());
        assert!(MosaicError::EmptyPositions.is_not_found());
        assert!(!MosaicError::DuplicateTile("x".into()).is_not_found());
        assert!(!MosaicError::invalid_dimensions("NaN width").is_not_found());
    }
}
