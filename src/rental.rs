//! Rental module.
//!
//! A rental binds a duration to a movie id so a customer can aggregate
//! charges across many movies. It carries no logic of its own and
//! caches nothing; charge and point computations go through the
//! catalog every time, so reclassifications and duration corrections
//! are always reflected.

use crate::catalog::Catalog;
use crate::error::RentalError;
use crate::money::{Amount, Points};
use crate::movie::MovieId;
use serde::{Deserialize, Serialize};

/// A movie rented for a number of days.
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Movie, Rental};
/// use rentstat::pricing::NewReleasePrice;
/// use rust_decimal_macros::dec;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
///
/// let rental = Rental::new(id, 2).unwrap();
/// assert_eq!(rental.charge(&catalog).unwrap(), dec!(6));
/// assert_eq!(rental.frequent_renter_points(&catalog).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    movie: MovieId,
    days_rented: u32,
}

impl Rental {
    /// Create a new rental.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::ZeroDuration`] if `days_rented` is zero.
    pub fn new(movie: MovieId, days_rented: u32) -> Result<Self, RentalError> {
        if days_rented == 0 {
            return Err(RentalError::ZeroDuration);
        }
        Ok(Self { movie, days_rented })
    }

    /// Id of the rented movie.
    pub fn movie(&self) -> MovieId {
        self.movie
    }

    /// The rental duration in days.
    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Correct the rental duration after the fact.
    ///
    /// The next statement reflects the new duration; no derived state
    /// is stored on the rental.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::ZeroDuration`] if `days_rented` is zero.
    pub fn set_days_rented(&mut self, days_rented: u32) -> Result<(), RentalError> {
        if days_rented == 0 {
            return Err(RentalError::ZeroDuration);
        }
        self.days_rented = days_rented;
        Ok(())
    }

    /// Charge for this rental at the movie's current pricing.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if `catalog` never issued
    /// this rental's movie id.
    pub fn charge(&self, catalog: &Catalog) -> Result<Amount, RentalError> {
        Ok(catalog.movie(self.movie)?.charge(self.days_rented))
    }

    /// Frequent renter points awarded for this rental at the movie's
    /// current pricing.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if `catalog` never issued
    /// this rental's movie id.
    pub fn frequent_renter_points(&self, catalog: &Catalog) -> Result<Points, RentalError> {
        Ok(catalog
            .movie(self.movie)?
            .frequent_renter_points(self.days_rented))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::Movie;
    use crate::pricing::{NewReleasePrice, RegularPrice};
    use rust_decimal_macros::dec;

    fn catalog_with(title: &str) -> (Catalog, MovieId) {
        let mut catalog = Catalog::new();
        let id = catalog.add_movie(Movie::new(title, Box::new(NewReleasePrice)).unwrap());
        (catalog, id)
    }

    #[test]
    fn test_rental_delegates_to_movie() {
        let (catalog, id) = catalog_with("The Watchmen");
        let rental = Rental::new(id, 3).unwrap();

        assert_eq!(rental.charge(&catalog).unwrap(), dec!(9));
        assert_eq!(rental.frequent_renter_points(&catalog).unwrap(), 2);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let (_, id) = catalog_with("The Watchmen");
        assert_eq!(Rental::new(id, 0).unwrap_err(), RentalError::ZeroDuration);
    }

    #[test]
    fn test_duration_correction() {
        let (catalog, id) = catalog_with("The Watchmen");
        let mut rental = Rental::new(id, 1).unwrap();
        assert_eq!(rental.charge(&catalog).unwrap(), dec!(3));

        rental.set_days_rented(4).unwrap();
        assert_eq!(rental.days_rented(), 4);
        assert_eq!(rental.charge(&catalog).unwrap(), dec!(12));

        assert_eq!(rental.set_days_rented(0).unwrap_err(), RentalError::ZeroDuration);
        assert_eq!(rental.days_rented(), 4);
    }

    #[test]
    fn test_reclassification_reaches_existing_rental() {
        let (mut catalog, id) = catalog_with("The Watchmen");
        let rental = Rental::new(id, 2).unwrap();
        assert_eq!(rental.charge(&catalog).unwrap(), dec!(6));

        catalog.set_pricing(id, Box::new(RegularPrice)).unwrap();
        assert_eq!(rental.charge(&catalog).unwrap(), dec!(2));
        assert_eq!(rental.frequent_renter_points(&catalog).unwrap(), 1);
    }

    #[test]
    fn test_unknown_movie_surfaces() {
        let (catalog, _) = catalog_with("The Watchmen");
        let mut other = Catalog::new();
        other.add_movie(Movie::new("Heat", Box::new(RegularPrice)).unwrap());
        let stray = other.add_movie(Movie::new("Ronin", Box::new(RegularPrice)).unwrap());

        let rental = Rental::new(stray, 2).unwrap();
        assert_eq!(
            rental.charge(&catalog).unwrap_err(),
            RentalError::UnknownMovie(stray)
        );
    }
}
