//! Statement compilation and rendering module.
//!
//! Rendering is split in two like the bonus pipeline: a statement is
//! first compiled into a plain data breakdown (customer name, one line
//! per rental in insertion order, totals), then a renderer stitches the
//! breakdown together with the fragments of a
//! [`StatementFormat`](crate::StatementFormat). The traversal has a
//! fixed shape regardless of format: header, every line in insertion
//! order, footer. Compilation happens per call; nothing is cached, so
//! reclassifications and duration corrections are always reflected.

use crate::catalog::Catalog;
use crate::customer::Customer;
use crate::error::RentalError;
use crate::format::StatementFormat;
use crate::money::{self, Amount, Points};
use serde::{Deserialize, Serialize};

/// One rendered rental of a statement breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Title of the rented movie.
    pub title: String,
    /// Charge for the rental at the movie's current pricing.
    pub charge: Amount,
}

/// A compiled statement breakdown.
///
/// This is a read-only snapshot of one statement computation: the
/// customer name, one line per rental in insertion order, and the
/// aggregate totals. It serializes cleanly, so a caller can ship the
/// breakdown across whatever boundary it likes instead of (or in
/// addition to) a formatted string.
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Customer, Movie, Rental, Statement};
/// use rentstat::pricing::NewReleasePrice;
/// use rust_decimal_macros::dec;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
///
/// let mut customer = Customer::new("C. Swayze").unwrap();
/// customer.add_rental(Rental::new(id, 2).unwrap());
///
/// let statement = Statement::compile(&customer, &catalog).unwrap();
/// assert_eq!(statement.lines.len(), 1);
/// assert_eq!(statement.total_charge, dec!(6));
/// assert_eq!(statement.total_points, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Name of the customer the statement is for.
    pub customer: String,
    /// One line per rental, in insertion order.
    pub lines: Vec<StatementLine>,
    /// Sum of every line's charge.
    pub total_charge: Amount,
    /// Sum of every rental's frequent renter points.
    pub total_points: Points,
}

impl Statement {
    /// Compile a statement breakdown for a customer against a catalog.
    ///
    /// Charges and points are computed at the movies' current pricing;
    /// an empty rental list compiles to an empty line list with zero
    /// totals.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if any rental refers to a
    /// movie id `catalog` never issued.
    pub fn compile(customer: &Customer, catalog: &Catalog) -> Result<Self, RentalError> {
        let mut lines = Vec::with_capacity(customer.rentals().len());
        let mut total_charge = money::zero();
        let mut total_points: Points = 0;

        for rental in customer.rentals() {
            let movie = catalog.movie(rental.movie())?;
            let charge = movie.charge(rental.days_rented());
            total_charge += charge;
            total_points += movie.frequent_renter_points(rental.days_rented());
            lines.push(StatementLine {
                title: movie.title().to_string(),
                charge,
            });
        }

        Ok(Self {
            customer: customer.name().to_string(),
            lines,
            total_charge,
            total_points,
        })
    }
}

/// Renders compiled statements with a borrowed format.
///
/// The renderer owns the one consequential algorithm of the crate: the
/// fixed header / lines-in-insertion-order / footer traversal. Only the
/// fragment strings differ between formats.
///
/// # Examples
///
/// ```rust
/// use rentstat::{Catalog, Customer, Movie, Rental, StatementRenderer, TextFormat};
/// use rentstat::pricing::NewReleasePrice;
///
/// let mut catalog = Catalog::new();
/// let id = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap());
///
/// let mut customer = Customer::new("C. Swayze").unwrap();
/// customer.add_rental(Rental::new(id, 2).unwrap());
///
/// let renderer = StatementRenderer::new(&TextFormat);
/// let text = renderer.render(&customer, &catalog).unwrap();
/// assert!(text.starts_with("Rental Record for C. Swayze\n"));
/// ```
pub struct StatementRenderer<'a> {
    format: &'a dyn StatementFormat,
}

impl<'a> StatementRenderer<'a> {
    /// Create a renderer for the given format.
    pub fn new(format: &'a dyn StatementFormat) -> Self {
        Self { format }
    }

    /// Compile and render a statement for a customer against a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UnknownMovie`] if any rental refers to a
    /// movie id `catalog` never issued.
    pub fn render(&self, customer: &Customer, catalog: &Catalog) -> Result<String, RentalError> {
        let statement = Statement::compile(customer, catalog)?;
        Ok(self.render_compiled(&statement))
    }

    /// Render an already-compiled statement breakdown.
    pub fn render_compiled(&self, statement: &Statement) -> String {
        let mut result = self.format.render_header(&statement.customer);
        for line in &statement.lines {
            result.push_str(&self.format.render_rental_line(&line.title, line.charge));
        }
        result.push_str(
            &self
                .format
                .render_footer(statement.total_charge, statement.total_points),
        );
        result
    }
}
