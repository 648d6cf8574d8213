//! Purchase-order line items and money arithmetic.

use serde::{Deserialize, Serialize};

/// UK standard rate applied when a purchase order includes VAT.
pub const VAT_RATE: f64 = 0.20;

/// One order line. `units` is the unit-of-measure label ("each", "m3", ...);
/// `price` is the per-unit price in pounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub qty: f64,
    pub description: String,
    pub units: String,
    pub price: f64,
}

impl PurchaseOrderItem {
    pub fn line_total(&self) -> f64 {
        round2(self.qty * self.price)
    }
}

/// Round to two decimal places, the precision every monetary figure is
/// displayed and compared at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_total_is_qty_times_price() {
        let item = PurchaseOrderItem {
            qty: 12.0,
            description: "Concrete block 7N".into(),
            units: "each".into(),
            price: 1.45,
        };
        assert_eq!(item.line_total(), 17.4);
    }

    #[test]
    fn test_line_total_rounds_to_two_places() {
        let item = PurchaseOrderItem {
            qty: 3.0,
            description: "Rebar offcut".into(),
            units: "m".into(),
            price: 0.333,
        };
        assert_eq!(item.line_total(), 1.0);
    }
}
