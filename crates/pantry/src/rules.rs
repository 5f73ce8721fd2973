//! Classification rules for grocery lots. Pure functions, no state.

use crate::model::Grocery;
use chrono::NaiveDate;

/// A lot is expired strictly after its expiry date; on the date itself it is still good.
pub fn is_expired(lot: &Grocery, today: NaiveDate) -> bool {
    today > lot.expiry_date()
}

/// Monetary value of a lot: quantity times unit price.
pub fn value(lot: &Grocery) -> f64 {
    lot.quantity() * lot.price_per_unit()
}

/// Whether `incoming` can be merged into `existing`.
///
/// Name, unit (case-sensitive), unit price (exact) and expiry date must all match. Lots of the
/// same item that differ in any of these stay separate.
#[allow(clippy::float_cmp)]
pub fn clubbable(existing: &Grocery, incoming: &Grocery) -> bool {
    existing.name() == incoming.name()
        && existing.unit() == incoming.unit()
        && existing.price_per_unit() == incoming.price_per_unit()
        && existing.expiry_date() == incoming.expiry_date()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn apple(unit: &str, price: f64, expiry: NaiveDate) -> Grocery {
        Grocery::new("Apple", 5.0, unit, price, expiry).unwrap()
    }

    #[test]
    fn test_is_expired_boundaries() {
        let lot = apple("kg", 10.0, date(2024, 3, 10));
        assert!(!is_expired(&lot, date(2024, 3, 9)));
        assert!(!is_expired(&lot, date(2024, 3, 10)), "same day is not expired");
        assert!(is_expired(&lot, date(2024, 3, 11)));
    }

    #[test]
    fn test_value() {
        let lot = apple("kg", 10.0, date(2024, 3, 10));
        assert_eq!(value(&lot), 50.0);
    }

    #[test]
    fn test_clubbable_requires_every_field() {
        let base = apple("kg", 10.0, date(2024, 3, 10));
        assert!(clubbable(&base, &apple("kg", 10.0, date(2024, 3, 10))));

        assert!(!clubbable(&base, &apple("KG", 10.0, date(2024, 3, 10))));
        assert!(!clubbable(&base, &apple("kg", 10.5, date(2024, 3, 10))));
        assert!(!clubbable(&base, &apple("kg", 10.0, date(2024, 3, 11))));

        let pear = Grocery::new("Pear", 5.0, "kg", 10.0, date(2024, 3, 10)).unwrap();
        assert!(!clubbable(&base, &pear));
    }
}
