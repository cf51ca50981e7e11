//! Error types for rental pricing and statements.
//!
//! All errors that can occur while pricing rentals or rendering
//! statements are represented by the `RentalError` enum.

use crate::movie::MovieId;
use thiserror::Error;

/// Errors that can occur while pricing rentals or rendering statements.
///
/// Every failure is immediate, synchronous, and local to the call that
/// introduced the bad value; the crate never catches its own errors and
/// has no fallback behavior.
///
/// # Examples
///
/// ```rust
/// use rentstat::RentalError;
///
/// let err = RentalError::EmptyTitle;
/// println!("{}", err); // "movie title must not be empty"
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RentalError {
    /// A movie was constructed with a blank title.
    #[error("movie title must not be empty")]
    EmptyTitle,

    /// A customer was constructed with a blank name.
    #[error("customer name must not be empty")]
    EmptyName,

    /// A rental was given a duration of zero days.
    ///
    /// Durations are unsigned, so negative values are unrepresentable;
    /// zero is the remaining invalid duration and is rejected rather
    /// than clamped, since pricing correctness depends on valid input.
    #[error("rental duration must be at least one day")]
    ZeroDuration,

    /// A rental refers to a movie id the catalog never issued.
    ///
    /// This occurs only when a rental is evaluated against a catalog
    /// other than the one that produced its `MovieId`.
    #[error("unknown movie: {0}")]
    UnknownMovie(MovieId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(RentalError::EmptyTitle.to_string().contains("title"));
        assert!(RentalError::EmptyName.to_string().contains("name"));
        assert!(RentalError::ZeroDuration.to_string().contains("one day"));
    }

    #[test]
    fn test_unknown_movie_display() {
        let err = RentalError::UnknownMovie(MovieId::new(3));
        let display = err.to_string();
        assert!(display.contains("unknown movie"));
        assert!(display.contains("#3"));
    }
}
