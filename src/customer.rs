//! Customer module.
//!
//! A customer owns an ordered list of rentals and answers aggregate
//! questions about them. Totals are derived, recomputed on demand and
//! never stored, so they are always consistent with the current rental
//! list and the movies' current pricing.

use crate::catalog::Catalog;
use crate::error::RentalError;
use crate::format::StatementFormat;
use crate::money::{self, Amount, Points};
use crate::rental::Rental;
use crate::statement::StatementRenderer;

/// A customer with an ordered rental list.
///
/// Rentals are appended in insertion order; duplicates are allowed and
/// there is no removal. Discarding the customer discards its rentals.
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Customer, Movie, Rental, TextFormat};
/// use rentstat::pricing::NewReleasePrice;
/// use rust_decimal_macros::dec;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
///
/// let mut customer = Customer::new("C. Swayze").unwrap();
/// customer.add_rental(Rental::new(id, 2).unwrap());
///
/// assert_eq!(customer.total_charge(&catalog).unwrap(), dec!(6));
/// let statement = customer.statement(&catalog, &TextFormat).unwrap();
/// assert!(statement.starts_with("Rental Record for C. Swayze\n"));
/// ```
#[derive(Debug)]
pub struct Customer {
    name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    /// Create a new customer with an empty rental list.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::EmptyName`] if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>) -> Result<Self, RentalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RentalError::EmptyName);
        }
        Ok(Self {
            name,
            rentals: Vec::new(),
        })
    }

    /// The customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a rental to the rental list.
    pub fn add_rental(&mut self, rental: Rental) {
        self.rentals.push(rental);
    }

    /// The rentals in insertion order.
    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// The rentals in insertion order, for correction in place.
    ///
    /// Durations can be fixed up after the fact with
    /// [`Rental::set_days_rented`]; the next statement reflects the
    /// corrected values since nothing downstream caches.
    pub fn rentals_mut(&mut self) -> &mut [Rental] {
        &mut self.rentals
    }

    /// Sum of every rental's charge at the movies' current pricing.
    ///
    /// An empty rental list totals zero.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if any rental refers to a
    /// movie id `catalog` never issued.
    pub fn total_charge(&self, catalog: &Catalog) -> Result<Amount, RentalError> {
        self.rentals
            .iter()
            .try_fold(money::zero(), |sum, rental| Ok(sum + rental.charge(catalog)?))
    }

    /// Sum of every rental's frequent renter points.
    ///
    /// An empty rental list totals zero.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if any rental refers to a
    /// movie id `catalog` never issued.
    pub fn total_frequent_renter_points(&self, catalog: &Catalog) -> Result<Points, RentalError> {
        self.rentals.iter().try_fold(0, |sum, rental| {
            Ok(sum + rental.frequent_renter_points(catalog)?)
        })
    }

    /// Render a statement of all rentals in the given format.
    ///
    /// The format is selected per call; nothing owns one. A customer
    /// with no rentals yields header and footer only, with zero totals.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if any rental refers to a
    /// movie id `catalog` never issued.
    pub fn statement(
        &self,
        catalog: &Catalog,
        format: &dyn StatementFormat,
    ) -> Result<String, RentalError> {
        StatementRenderer::new(format).render(self, catalog)
    }
}
