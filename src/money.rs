//! Monetary types for charge calculations.
//!
//! Charges are decimal values, never binary floats, so the 1.5-step
//! pricing arithmetic is exact. `Decimal` display preserves the scale
//! the calculation produced ("6", "6.5", "5.0") with no fixed-decimal
//! truncation, which is exactly the unrounded numeric-to-string
//! behavior statements rely on.

use rust_decimal::Decimal;

/// A monetary amount.
///
/// Alias for [`rust_decimal::Decimal`]. All charge arithmetic in the
/// crate happens on this type.
///
/// # Examples
///
/// ```rust
/// use rentstat::Amount;
/// use rust_decimal_macros::dec;
///
/// let charge: Amount = dec!(2) + dec!(3) * dec!(1.5);
/// assert_eq!(charge, dec!(6.5));
/// assert_eq!(charge.to_string(), "6.5");
/// ```
pub type Amount = Decimal;

/// A frequent renter point total.
///
/// Points are always whole and non-negative.
pub type Points = u64;

/// An amount of zero, the total for a customer with no rentals.
pub fn zero() -> Amount {
    Decimal::ZERO
}

/// Convert a rental duration to an `Amount` for pricing arithmetic.
pub fn days(days_rented: u32) -> Amount {
    Decimal::from(days_rented)
}
