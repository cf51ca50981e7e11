//! Statement format module.
//!
//! Formats supply the four format-specific fragments a statement is
//! assembled from: header, per-rental line, footer, and the
//! numeric-to-display conversion. Formats are stateless; nothing owns
//! one, it is picked per statement call. The traversal that stitches
//! the fragments together lives in [`statement`](crate::statement) and
//! is identical for every format.

use crate::money::{Amount, Points};

/// Trait for statement formats.
///
/// Implementations are pure string producers. Amounts are rendered
/// through [`render_amount`](StatementFormat::render_amount), which by
/// default prints the decimal at the full precision the pricing
/// arithmetic produced, with no fixed-decimal truncation.
///
/// # Examples
///
/// ```rust
/// use rentstat::format::{StatementFormat, TextFormat};
/// use rust_decimal_macros::dec;
///
/// let format = TextFormat;
/// assert_eq!(format.render_header("C. Swayze"), "Rental Record for C. Swayze\n");
/// assert_eq!(format.render_rental_line("The Watchmen", dec!(6)), "\tThe Watchmen\t6\n");
/// ```
pub trait StatementFormat: Send + Sync {
    /// Render the statement header for a customer name.
    fn render_header(&self, customer_name: &str) -> String;

    /// Render the line for a single rental.
    fn render_rental_line(&self, movie_title: &str, charge: Amount) -> String;

    /// Render the statement footer with the aggregate totals.
    fn render_footer(&self, total_charge: Amount, total_points: Points) -> String;

    /// Convert an amount to its display string.
    fn render_amount(&self, amount: Amount) -> String {
        amount.to_string()
    }
}

/// Plain-text statement fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl StatementFormat for TextFormat {
    fn render_header(&self, customer_name: &str) -> String {
        format!("Rental Record for {}\n", customer_name)
    }

    fn render_rental_line(&self, movie_title: &str, charge: Amount) -> String {
        format!("\t{}\t{}\n", movie_title, self.render_amount(charge))
    }

    fn render_footer(&self, total_charge: Amount, total_points: Points) -> String {
        format!(
            "Amount owed is {}\nYou earned {} frequent renter points",
            self.render_amount(total_charge),
            total_points
        )
    }
}

/// HTML statement fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl StatementFormat for HtmlFormat {
    fn render_header(&self, customer_name: &str) -> String {
        format!("<h1>Rental Record for <em>{}</em></h1><p>\n", customer_name)
    }

    fn render_rental_line(&self, movie_title: &str, charge: Amount) -> String {
        format!("\t{}\t{}<br>\n", movie_title, self.render_amount(charge))
    }

    fn render_footer(&self, total_charge: Amount, total_points: Points) -> String {
        format!(
            "<p>You owed <em>{}</em></p>\n<p>On this rental you earned <em>{}</em> frequent renter points</p>",
            self.render_amount(total_charge),
            total_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_text_fragments() {
        let format = TextFormat;
        assert_eq!(format.render_header("C. Swayze"), "Rental Record for C. Swayze\n");
        assert_eq!(
            format.render_rental_line("The Watchmen", dec!(6)),
            "\tThe Watchmen\t6\n"
        );
        assert_eq!(
            format.render_footer(dec!(8), 3),
            "Amount owed is 8\nYou earned 3 frequent renter points"
        );
    }

    #[test]
    fn test_html_fragments() {
        let format = HtmlFormat;
        assert_eq!(
            format.render_header("C. Swayze"),
            "<h1>Rental Record for <em>C. Swayze</em></h1><p>\n"
        );
        assert_eq!(
            format.render_rental_line("The Watchmen", dec!(6)),
            "\tThe Watchmen\t6<br>\n"
        );
        assert_eq!(
            format.render_footer(dec!(8), 3),
            "<p>You owed <em>8</em></p>\n<p>On this rental you earned <em>3</em> frequent renter points</p>"
        );
    }

    #[test]
    fn test_amount_display_unrounded() {
        let format = TextFormat;
        assert_eq!(format.render_amount(dec!(6.5)), "6.5");
        assert_eq!(format.render_amount(dec!(6)), "6");
        // A whole value computed at fractional scale keeps that scale.
        assert_eq!(format.render_amount(dec!(5.0)), "5.0");
    }
}
