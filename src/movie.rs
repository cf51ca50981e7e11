//! Movie module.
//!
//! A movie pairs a title with its current pricing strategy and forwards
//! charge and point computations to that strategy. The strategy is
//! swappable at runtime, so a new release can be reclassified as
//! regular once its rental window ends.

use crate::error::RentalError;
use crate::money::{Amount, Points};
use crate::pricing::PricingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a movie in a [`Catalog`](crate::Catalog).
///
/// Rentals hold ids rather than references to the movies they price,
/// so a movie stays mutable (reclassifiable) while any number of
/// rentals point at it. Ids are only meaningful to the catalog that
/// issued them.
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Movie};
/// use rentstat::pricing::RegularPrice;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("Big Trouble", Box::new(RegularPrice)).unwrap());
/// assert_eq!(catalog.movie(id).unwrap().title(), "Big Trouble");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(usize);

impl MovieId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A movie with a title and a current pricing strategy.
///
/// The movie does not own rental history; it only answers charge and
/// point questions for a given duration by delegating to its strategy.
///
/// # Examples
///
/// ```rust
/// use rentstat::Movie;
/// use rentstat::pricing::{NewReleasePrice, RegularPrice};
/// use rust_decimal_macros::dec;
///
/// let mut movie = Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap();
/// assert_eq!(movie.charge(2), dec!(6));
///
/// // Reclassify once the new-release window ends.
/// movie.set_pricing(Box::new(RegularPrice));
/// assert_eq!(movie.charge(2), dec!(2));
/// ```
pub struct Movie {
    title: String,
    pricing: Box<dyn PricingStrategy>,
}

impl Movie {
    /// Create a new movie.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::EmptyTitle`] if the title is empty or
    /// whitespace-only.
    pub fn new(
        title: impl Into<String>,
        pricing: Box<dyn PricingStrategy>,
    ) -> Result<Self, RentalError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(RentalError::EmptyTitle);
        }
        Ok(Self { title, pricing })
    }

    /// The movie's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Compute the charge for renting this movie for `days_rented`
    /// days, forwarding to the current strategy.
    pub fn charge(&self, days_rented: u32) -> Amount {
        self.pricing.charge(days_rented)
    }

    /// Compute the frequent renter points for renting this movie for
    /// `days_rented` days, forwarding to the current strategy.
    pub fn frequent_renter_points(&self, days_rented: u32) -> Points {
        self.pricing.frequent_renter_points(days_rented)
    }

    /// Replace the pricing strategy.
    ///
    /// Takes effect for every rental referencing this movie on its
    /// next charge computation; nothing caches charges. The title is
    /// never mutated.
    pub fn set_pricing(&mut self, pricing: Box<dyn PricingStrategy>) {
        self.pricing = pricing;
    }
}

impl fmt::Debug for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Movie")
            .field("title", &self.title)
            .field("pricing", &self.pricing.description())
            .finish()
    }
}
