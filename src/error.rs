//! Error types for rating evaluation.
//!
//! Arithmetic in this crate never fails. Every `RatingError` comes from
//! resolving metadata or loading a registry/config document, and is
//! raised before any rating arithmetic runs.

use crate::id::{MoveId, SpeciesId};
use thiserror::Error;

/// Errors that can occur while rating a Pokémon.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::{RatingError, SpeciesId};
///
/// let err = RatingError::SpeciesNotFound(SpeciesId::from_str("MISSINGNO"));
/// assert_eq!(err.to_string(), "Species not found: MISSINGNO");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    /// No metadata is registered for the species.
    #[error("Species not found: {0}")]
    SpeciesNotFound(SpeciesId),

    /// No metadata is registered for the move.
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),

    /// A registry document could not be parsed.
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    /// A configuration document could not be parsed.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RatingError::MoveNotFound(MoveId::from_str("SPLASH_FAST"));
        assert!(err.to_string().contains("SPLASH_FAST"));
    }

    #[test]
    fn test_errors_compare() {
        let a = RatingError::SpeciesNotFound(SpeciesId::from_str("EEVEE"));
        let b = RatingError::SpeciesNotFound(SpeciesId::from_str("EEVEE"));
        assert_eq!(a, b);
        assert_ne!(a, RatingError::InvalidConfig(String::from("EEVEE")));
    }
}
