use proptest::prelude::*;
use rentstat::pricing::{ChildrensPrice, NewReleasePrice, PricingStrategy, RegularPrice};
use rentstat::*;
use rust_decimal_macros::dec;

fn strategies() -> Vec<Box<dyn PricingStrategy>> {
    vec![
        Box::new(RegularPrice),
        Box::new(NewReleasePrice),
        Box::new(ChildrensPrice),
    ]
}

/// Zero days is valid and degenerates to each variant's base amount.
#[test]
fn test_zero_days_base_amounts() {
    assert_eq!(RegularPrice.charge(0), dec!(2));
    assert_eq!(NewReleasePrice.charge(0), dec!(0));
    assert_eq!(ChildrensPrice.charge(0), dec!(1.5));
}

/// The regression-tested formula values from the reference behavior.
#[test]
fn test_reference_formula_values() {
    assert_eq!(RegularPrice.charge(5), dec!(6.5));
    assert_eq!(NewReleasePrice.charge(3), dec!(9));
    assert_eq!(NewReleasePrice.frequent_renter_points(3), 2);
    assert_eq!(ChildrensPrice.charge(5), dec!(4.5));
}

proptest! {
    /// Charge is monotonically non-decreasing in the duration for
    /// every pricing variant.
    #[test]
    fn charge_non_decreasing(days in 0u32..30) {
        for strategy in strategies() {
            prop_assert!(
                strategy.charge(days + 1) >= strategy.charge(days),
                "{} charge decreased between {} and {} days",
                strategy.description(),
                days,
                days + 1
            );
        }
    }

    /// Regular pricing matches its closed form over the tested range.
    #[test]
    fn regular_closed_form(days in 0u32..30) {
        let expected = if days <= 2 {
            dec!(2)
        } else {
            dec!(2) + Amount::from(days - 2) * dec!(1.5)
        };
        prop_assert_eq!(RegularPrice.charge(days), expected);
    }

    /// New-release pricing is linear in the duration and awards the
    /// bonus point exactly for rentals longer than one day.
    #[test]
    fn new_release_closed_form(days in 0u32..30) {
        prop_assert_eq!(NewReleasePrice.charge(days), Amount::from(days) * dec!(3));
        let expected_points = if days > 1 { 2 } else { 1 };
        prop_assert_eq!(NewReleasePrice.frequent_renter_points(days), expected_points);
    }

    /// Children's pricing matches its closed form over the tested range.
    #[test]
    fn childrens_closed_form(days in 0u32..30) {
        let expected = if days <= 3 {
            dec!(1.5)
        } else {
            dec!(1.5) + Amount::from(days - 3) * dec!(1.5)
        };
        prop_assert_eq!(ChildrensPrice.charge(days), expected);
    }

    /// A customer's total charge equals the sum of per-rental charges
    /// for any rental list, including the empty one.
    #[test]
    fn total_charge_is_sum_of_rentals(durations in proptest::collection::vec(1u32..30, 0..8)) {
        let mut catalog = Catalog::new();
        let mut customer = Customer::new("C. Swayze").unwrap();
        let mut expected = dec!(0);

        for (i, days) in durations.iter().enumerate() {
            let strategy: Box<dyn PricingStrategy> = match i % 3 {
                0 => Box::new(RegularPrice),
                1 => Box::new(NewReleasePrice),
                _ => Box::new(ChildrensPrice),
            };
            let id = catalog.add_movie(Movie::new(format!("Movie {}", i), strategy).unwrap());
            let rental = Rental::new(id, *days).unwrap();
            expected += rental.charge(&catalog).unwrap();
            customer.add_rental(rental);
        }

        prop_assert_eq!(customer.total_charge(&catalog).unwrap(), expected);
    }
}
