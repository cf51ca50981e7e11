//! # rentstat - Deterministic Video-Rental Pricing and Statement Engine
//!
//! A pricing engine for video rentals that provides:
//! - **Deterministic** charges (same rentals → same statement)
//! - **Exact** decimal arithmetic (no binary-float rounding drift)
//! - **Polymorphic** pricing (regular / new release / children's, swappable at runtime)
//! - **Format-agnostic** statements (one traversal, pluggable fragments)
//!
//! ## Core Concepts
//!
//! ### Statement Pipeline
//!
//! A statement flows through a simple pipeline:
//!
//! ```text
//! [PricingStrategy] → [Movie] → [Rental] → [Statement] → [StatementFormat]
//! ```
//!
//! 1. **Strategies** turn a duration into a charge and a point award
//! 2. **Movies** hold a title and a swappable strategy
//! 3. **Rentals** bind a duration to a movie id
//! 4. **Statements** aggregate a customer's rentals in insertion order
//! 5. **Formats** supply the header / line / footer fragments (text, HTML)
//!
//! ### Key Features
//!
//! - **Catalog**: movies live in an owning table and are shared by id,
//!   so a movie stays reclassifiable while any number of rentals point at it
//! - **No caching**: charges and totals are recomputed on demand, so
//!   reclassifications and duration corrections are always reflected
//! - **Template rendering**: one fixed header/lines/footer traversal,
//!   parameterized by the format's fragment renderers
//! - **Debug-friendly**: statements compile to a serializable breakdown
//!
//! ## Example
//!
//! ```rust
//! use rentstat::*;
//! use rentstat::pricing::{NewReleasePrice, RegularPrice};
//!
//! let mut catalog = Catalog::new();
//! let watchmen = catalog.add_movie(
//!     Movie::new("The Watchmen", Box::new(NewReleasePrice)).unwrap(),
//! );
//! let heat = catalog.add_movie(
//!     Movie::new("Heat", Box::new(RegularPrice)).unwrap(),
//! );
//!
//! let mut customer = Customer::new("C. Swayze").unwrap();
//! customer.add_rental(Rental::new(watchmen, 2).unwrap());
//! customer.add_rental(Rental::new(heat, 2).unwrap());
//!
//! let statement = customer.statement(&catalog, &TextFormat).unwrap();
//! assert_eq!(
//!     statement,
//!     "Rental Record for C. Swayze\n\
//!      \tThe Watchmen\t6\n\
//!      \tHeat\t2\n\
//!      Amount owed is 8\n\
//!      You earned 3 frequent renter points"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Monetary amount and point types
//! - [`pricing`] - Pricing strategies (produce charges and points)
//! - [`movie`] - Movies and movie ids
//! - [`catalog`] - Owning movie table
//! - [`rental`] - Rentals (duration bound to a movie id)
//! - [`customer`] - Customers and aggregate totals
//! - [`format`] - Statement formats (text, HTML)
//! - [`statement`] - Statement compilation and rendering
//! - [`error`] - Error types

pub mod catalog;
pub mod customer;
pub mod error;
pub mod format;
pub mod money;
pub mod movie;
pub mod pricing;
pub mod rental;
pub mod statement;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use customer::Customer;
pub use error::RentalError;
pub use movie::{Movie, MovieId};
pub use rental::Rental;

// Re-export pricing strategies and statement formats
pub use format::{HtmlFormat, StatementFormat, TextFormat};
pub use pricing::{ChildrensPrice, NewReleasePrice, PricingStrategy, RegularPrice};

// Re-export statement types
pub use statement::{Statement, StatementLine, StatementRenderer};

// Re-export numeric types
pub use money::{Amount, Points};
