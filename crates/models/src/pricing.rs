use rust_decimal::Decimal;
use serde::Serialize;

/// Price of a stay: nightly rate times the number of nights
pub fn stay_total(price_per_night: Decimal, nights: i64) -> Decimal {
    price_per_night * Decimal::from(nights)
}

/// Flat tax rate applied on the confirmation page
fn tax_rate() -> Decimal {
    // 15%
    Decimal::new(15, 2)
}

/// Fixed service fee added to every confirmed stay
fn service_fee() -> Decimal {
    Decimal::from(12)
}

/// The price breakdown shown on the confirmation page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub service_fee: Decimal,
    pub grand_total: Decimal,
}

impl Quote {
    pub fn for_subtotal(subtotal: Decimal) -> Self {
        let tax = (subtotal * tax_rate()).round_dp(2);
        let service_fee = service_fee();
        let grand_total = subtotal + tax + service_fee;

        Self {
            subtotal,
            tax,
            service_fee,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stay_total() {
        assert_eq!(stay_total(Decimal::from(100), 2), Decimal::from(200));
        assert_eq!(stay_total(Decimal::new(7550, 2), 3), Decimal::new(22650, 2));
        assert_eq!(stay_total(Decimal::from(100), 0), Decimal::ZERO);
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = Quote::for_subtotal(Decimal::from(200));
        assert_eq!(quote.subtotal, Decimal::from(200));
        assert_eq!(quote.tax, Decimal::from(30));
        assert_eq!(quote.service_fee, Decimal::from(12));
        assert_eq!(quote.grand_total, Decimal::from(242));
    }

    #[test]
    fn test_quote_rounds_tax_to_cents() {
        // 15% of 99.99 is 14.9985, shown as 15.00
        let quote = Quote::for_subtotal(Decimal::new(9999, 2));
        assert_eq!(quote.tax, Decimal::new(1500, 2));
        assert_eq!(quote.grand_total, Decimal::new(12699, 2));
    }
}
