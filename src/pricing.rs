//! Pricing strategies module.
//!
//! Strategies convert a rental duration into a charge and a frequent
//! renter point award. Strategies are stateless and deterministic -
//! the same duration always produces the same charge. All branching on
//! the pricing classification lives here; calling code dispatches
//! through the trait and never inspects a type tag.

use crate::money::{self, Amount, Points};
use rust_decimal_macros::dec;

/// Trait for pricing strategies.
///
/// A strategy is pure: given a duration in days it returns a charge
/// and a point award, with no stored state beyond the variant identity.
/// A duration of zero is valid and degenerates to the variant's base
/// amount. For every variant the charge is monotonically non-decreasing
/// in the duration.
///
/// # Examples
///
/// ```rust
/// use rentstat::pricing::{PricingStrategy, RegularPrice};
/// use rust_decimal_macros::dec;
///
/// let price = RegularPrice;
/// assert_eq!(price.charge(5), dec!(6.5));
/// assert_eq!(price.frequent_renter_points(5), 1);
/// ```
pub trait PricingStrategy: Send + Sync {
    /// Compute the charge for a rental of `days_rented` days.
    fn charge(&self, days_rented: u32) -> Amount;

    /// Compute the frequent renter points awarded for a rental of
    /// `days_rented` days.
    ///
    /// Default implementation awards a single point regardless of
    /// duration, which is the rule shared by the regular and
    /// children's classifications.
    fn frequent_renter_points(&self, days_rented: u32) -> Points {
        let _ = days_rented;
        1
    }

    /// Human-readable name of this strategy, used in Debug output.
    fn description(&self) -> &'static str;
}

/// Regular pricing: a flat base of 2 for up to two days, then 1.5 per
/// additional day.
///
/// # Examples
///
/// ```rust
/// use rentstat::pricing::{PricingStrategy, RegularPrice};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(RegularPrice.charge(2), dec!(2));
/// assert_eq!(RegularPrice.charge(5), dec!(6.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RegularPrice;

impl PricingStrategy for RegularPrice {
    fn charge(&self, days_rented: u32) -> Amount {
        let mut result = dec!(2);
        if days_rented > 2 {
            result += money::days(days_rented - 2) * dec!(1.5);
        }
        result
    }

    fn description(&self) -> &'static str {
        "regular"
    }
}

/// New-release pricing: 3 per day, with a bonus point for rentals
/// longer than one day.
///
/// # Examples
///
/// ```rust
/// use rentstat::pricing::{NewReleasePrice, PricingStrategy};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(NewReleasePrice.charge(3), dec!(9));
/// assert_eq!(NewReleasePrice.frequent_renter_points(3), 2);
/// assert_eq!(NewReleasePrice.frequent_renter_points(1), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NewReleasePrice;

impl PricingStrategy for NewReleasePrice {
    fn charge(&self, days_rented: u32) -> Amount {
        money::days(days_rented) * dec!(3)
    }

    fn frequent_renter_points(&self, days_rented: u32) -> Points {
        if days_rented > 1 {
            2
        } else {
            1
        }
    }

    fn description(&self) -> &'static str {
        "new release"
    }
}

/// Children's pricing: a flat base of 1.5 for up to three days, then
/// 1.5 per additional day.
///
/// # Examples
///
/// ```rust
/// use rentstat::pricing::{ChildrensPrice, PricingStrategy};
/// use rust_decimal_macros::dec;
///
/// assert_eq!(ChildrensPrice.charge(3), dec!(1.5));
/// assert_eq!(ChildrensPrice.charge(5), dec!(4.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChildrensPrice;

impl PricingStrategy for ChildrensPrice {
    fn charge(&self, days_rented: u32) -> Amount {
        let mut result = dec!(1.5);
        if days_rented > 3 {
            result += money::days(days_rented - 3) * dec!(1.5);
        }
        result
    }

    fn description(&self) -> &'static str {
        "childrens"
    }
}
