//! Basic example: pricing a single movie across classifications
//!
//! This example demonstrates:
//! - Creating movies with a pricing strategy
//! - Computing charges and frequent renter points
//! - Reclassifying a movie at runtime

use rentstat::pricing::{ChildrensPrice, NewReleasePrice, RegularPrice};
use rentstat::*;

fn main() -> Result<(), RentalError> {
    // A freshly released title starts on new-release pricing
    let mut movie = Movie::new("The Watchmen", Box::new(NewReleasePrice))?;

    println!("Movie: {}", movie.title());
    println!("\nAs new release (2 days):");
    println!("  charge: {}", movie.charge(2));
    println!("  points: {}", movie.frequent_renter_points(2));

    // The rental window ends; reclassify as regular
    movie.set_pricing(Box::new(RegularPrice));
    println!("\nAs regular (2 days):");
    println!("  charge: {}", movie.charge(2));
    println!("  points: {}", movie.frequent_renter_points(2));

    // Or as a children's title
    movie.set_pricing(Box::new(ChildrensPrice));
    println!("\nAs children's (2 days):");
    println!("  charge: {}", movie.charge(2));
    println!("  points: {}", movie.frequent_renter_points(2));

    Ok(())
}
