//! Statement example: renting several movies and printing statements
//!
//! This example demonstrates:
//! - Registering movies in a catalog
//! - Attaching rentals to a customer
//! - Rendering the same rentals as text and as HTML
//! - Inspecting the compiled statement breakdown

use rentstat::pricing::{ChildrensPrice, NewReleasePrice, RegularPrice};
use rentstat::*;

fn main() -> Result<(), RentalError> {
    let mut catalog = Catalog::new();

    println!("Registering movies:");
    let watchmen = catalog.add_movie(Movie::new("The Watchmen", Box::new(NewReleasePrice))?);
    println!("  - The Watchmen (new release)");
    let heat = catalog.add_movie(Movie::new("Heat", Box::new(RegularPrice))?);
    println!("  - Heat (regular)");
    let spirited = catalog.add_movie(Movie::new("Spirited Away", Box::new(ChildrensPrice))?);
    println!("  - Spirited Away (children's)");

    let mut customer = Customer::new("C. Swayze")?;
    customer.add_rental(Rental::new(watchmen, 2)?);
    customer.add_rental(Rental::new(heat, 5)?);
    customer.add_rental(Rental::new(spirited, 4)?);

    println!("\n=== Text statement ===");
    println!("{}", customer.statement(&catalog, &TextFormat)?);

    println!("\n=== HTML statement ===");
    println!("{}", customer.statement(&catalog, &HtmlFormat)?);

    // The breakdown behind both renderings
    let statement = Statement::compile(&customer, &catalog)?;
    println!("\n=== Breakdown ===");
    for line in &statement.lines {
        println!("  {}: {}", line.title, line.charge);
    }
    println!("  total charge: {}", statement.total_charge);
    println!("  total points: {}", statement.total_points);

    Ok(())
}
