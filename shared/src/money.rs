//! Money calculation utilities using rust_decimal for precision
//!
//! Amounts travel as `f64` in currency units (the API's JSON numbers).
//! Sums and products are computed as `Decimal`, then converted back to
//! `f64` rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Currency symbol used by the marketplace (INR)
pub const CURRENCY_SYMBOL: &str = "₹";

/// Convert f64 to Decimal, non-finite values count as zero
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// price × quantity
pub fn line_total(price: f64, quantity: u32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Sum of price × quantity over all lines, rounded to 2 dp
pub fn sum_lines<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (f64, u32)>,
{
    let total: Decimal = lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum();
    to_f64(total)
}

/// Format an amount for display, e.g. `₹240.00`
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);
        assert_eq!(to_f64(to_decimal(a) + to_decimal(b)), 0.3);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_sum_lines() {
        assert_eq!(sum_lines([(100.0, 2), (45.5, 1)]), 245.5);
        assert_eq!(sum_lines([(10.99, 3)]), 32.97);
        assert_eq!(sum_lines(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(240.0), "₹240.00");
        assert_eq!(format_amount(0.5), "₹0.50");
    }
}
