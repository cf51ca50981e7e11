//! Movie catalog module.
//!
//! The catalog is the owning table of movies. It hands out `MovieId`s
//! on insertion and resolves them back to movies on lookup, so rentals
//! can share movies without holding references into mutable state.
//! Movies outlive every rental pointing at them for as long as the
//! catalog lives.

use crate::error::RentalError;
use crate::movie::{Movie, MovieId};
use crate::pricing::PricingStrategy;

/// The owning table of movies.
///
/// Movies are appended and never removed; the id returned by
/// [`add_movie`](Catalog::add_movie) stays valid for the catalog's
/// lifetime. Looking up an id the catalog never issued yields
/// [`RentalError::UnknownMovie`].
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Movie};
/// use rentstat::pricing::{NewReleasePrice, RegularPrice};
/// use rust_decimal_macros::dec;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
///
/// assert_eq!(catalog.movie(id).unwrap().charge(2), dec!(6));
///
/// // Reclassify in place; every rental holding `id` sees the new
/// // pricing on its next charge computation.
/// catalog.set_pricing(id, Box::new(RegularPrice)).unwrap();
/// assert_eq!(catalog.movie(id).unwrap().charge(2), dec!(2));
/// ```
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie to the catalog and return its id.
    pub fn add_movie(&mut self, movie: Movie) -> MovieId {
        let id = MovieId::new(self.movies.len());
        self.movies.push(movie);
        id
    }

    /// Look up a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if this catalog never
    /// issued `id`.
    pub fn movie(&self, id: MovieId) -> Result<&Movie, RentalError> {
        self.movies
            .get(id.index())
            .ok_or(RentalError::UnknownMovie(id))
    }

    /// Look up a movie by id for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if this catalog never
    /// issued `id`.
    pub fn movie_mut(&mut self, id: MovieId) -> Result<&mut Movie, RentalError> {
        self.movies
            .get_mut(id.index())
            .ok_or(RentalError::UnknownMovie(id))
    }

    /// Replace the pricing strategy of the movie with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if this catalog never
    /// issued `id`.
    pub fn set_pricing(
        &mut self,
        id: MovieId,
        pricing: Box<dyn PricingStrategy>,
    ) -> Result<(), RentalError> {
        self.movie_mut(id)?.set_pricing(pricing);
        Ok(())
    }

    /// Number of movies in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog holds no movies.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{ChildrensPrice, NewReleasePrice, RegularPrice};
    use rust_decimal_macros::dec;

    fn movie(title: &str) -> Movie {
        Movie::new(title, Box::new(RegularPrice)).unwrap()
    }

    #[test]
    fn test_add_and_lookup() {
        let mut catalog = Catalog::new();
        let a = catalog.add_movie(movie("Heat"));
        let b = catalog.add_movie(movie("Ronin"));

        assert_eq!(catalog.movie(a).unwrap().title(), "Heat");
        assert_eq!(catalog.movie(b).unwrap().title(), "Ronin");
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut big = Catalog::new();
        big.add_movie(movie("Heat"));
        let stray = big.add_movie(movie("Ronin"));

        let small = Catalog::new();
        assert_eq!(
            small.movie(stray).unwrap_err(),
            RentalError::UnknownMovie(stray)
        );
    }

    #[test]
    fn test_set_pricing_in_place() {
        let mut catalog = Catalog::new();
        let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
        assert_eq!(catalog.movie(id).unwrap().charge(2), dec!(6));

        catalog.set_pricing(id, Box::new(ChildrensPrice)).unwrap();
        assert_eq!(catalog.movie(id).unwrap().charge(2), dec!(1.5));
    }

    #[test]
    fn test_set_pricing_unknown_id() {
        let mut big = Catalog::new();
        big.add_movie(movie("Heat"));
        let stray = big.add_movie(movie("Ronin"));

        let mut small = Catalog::new();
        assert_eq!(
            small.set_pricing(stray, Box::new(RegularPrice)).unwrap_err(),
            RentalError::UnknownMovie(stray)
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }
}
