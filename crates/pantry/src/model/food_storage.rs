//! # Food Storage
//!
//! The inventory: lots grouped by item name, oldest first within each name.
//!
//! Adding stock merges into an existing lot when the two are
//! [clubbable](crate::rules::clubbable), otherwise the new lot queues behind the others.
//! Removing stock is all-or-nothing and depletes the oldest lots first.

use crate::model::Grocery;
use crate::rules;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Where [`FoodStorage::add_lot`] put an incoming lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotPlacement {
    /// Added to the quantity of an existing lot.
    Merged,
    /// Stored as a new lot.
    Appended,
}

/// Lots keyed by item name.
///
/// Invariant: no name maps to an empty sequence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FoodStorage {
    groceries_per_name: BTreeMap<String, Vec<Grocery>>,
}

impl FoodStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `lot`, merging it into the first clubbable lot of the same name if there is one.
    ///
    /// Lots whose combined quantity would not be finite are stored apart.
    pub fn add_lot(&mut self, lot: Grocery) -> LotPlacement {
        let lots = self
            .groceries_per_name
            .entry(lot.name().to_string())
            .or_default();

        let merged = lots
            .iter_mut()
            .find(|existing| rules::clubbable(existing, &lot))
            .is_some_and(|existing| existing.absorb(&lot).is_ok());

        if merged {
            LotPlacement::Merged
        } else {
            lots.push(lot);
            LotPlacement::Appended
        }
    }

    /// Removes `quantity` of `name`, oldest lots first.
    ///
    /// Returns `false` without touching anything when the name is unknown, when fewer than
    /// `quantity` units are stored in total, or when `quantity` is negative or not a number.
    /// Fully consumed lots are dropped, and the name with them once its last lot is gone.
    pub fn remove_quantity(&mut self, name: &str, quantity: f64) -> bool {
        if quantity.is_nan() || quantity < 0.0 {
            return false;
        }
        let Some(lots) = self.groceries_per_name.get_mut(name) else {
            return false;
        };

        let total: f64 = lots.iter().map(Grocery::quantity).sum();
        if total < quantity {
            return false;
        }

        let mut remaining = quantity;
        let mut consumed = 0;
        for lot in lots.iter_mut() {
            if remaining <= 0.0 {
                break;
            }
            if lot.quantity() <= remaining {
                remaining -= lot.quantity();
                consumed += 1;
            } else {
                lot.deplete(remaining);
                remaining = 0.0;
            }
        }
        lots.drain(..consumed);

        if lots.is_empty() {
            self.groceries_per_name.remove(name);
        }
        true
    }

    /// Every lot, by name and then oldest first. Expired lots included.
    pub fn all_lots(&self) -> Vec<Grocery> {
        self.groceries_per_name.values().flatten().cloned().collect()
    }

    /// The lots that are expired as of `today`.
    pub fn expired_lots(&self, today: NaiveDate) -> Vec<Grocery> {
        self.lots()
            .filter(|lot| rules::is_expired(lot, today))
            .cloned()
            .collect()
    }

    pub fn total_value(&self) -> f64 {
        self.lots().map(rules::value).sum()
    }

    pub fn total_expired_value(&self, today: NaiveDate) -> f64 {
        self.lots()
            .filter(|lot| rules::is_expired(lot, today))
            .map(rules::value)
            .sum()
    }

    /// Lots stored under `name`, oldest first. Empty if the name is unknown.
    pub fn lots_for(&self, name: &str) -> &[Grocery] {
        self.groceries_per_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of lots across all names.
    pub fn len(&self) -> usize {
        self.groceries_per_name.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groceries_per_name.is_empty()
    }

    fn lots(&self) -> impl Iterator<Item = &Grocery> {
        self.groceries_per_name.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lot(name: &str, quantity: f64, price: f64, expiry: NaiveDate) -> Grocery {
        Grocery::new(name, quantity, "kg", price, expiry).unwrap()
    }

    #[test]
    fn test_identical_lots_merge() {
        let mut storage = FoodStorage::new();
        let expiry = date(2024, 6, 1);

        assert_eq!(storage.add_lot(lot("Apple", 5.0, 10.0, expiry)), LotPlacement::Appended);
        assert_eq!(storage.add_lot(lot("Apple", 3.0, 10.0, expiry)), LotPlacement::Merged);

        let apples = storage.lots_for("Apple");
        assert_eq!(apples.len(), 1);
        assert_eq!(apples[0].quantity(), 8.0);
    }

    #[test]
    fn test_different_expiry_keeps_lots_apart() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 5.0, 10.0, date(2024, 6, 1)));
        storage.add_lot(lot("Apple", 3.0, 10.0, date(2024, 6, 2)));

        let apples = storage.lots_for("Apple");
        assert_eq!(apples.len(), 2);
        assert_eq!(apples[0].quantity(), 5.0);
        assert_eq!(apples[1].quantity(), 3.0);
    }

    #[test]
    fn test_overflowing_merge_appends() {
        let mut storage = FoodStorage::new();
        let expiry = date(2024, 6, 1);

        storage.add_lot(lot("Salt", f64::MAX, 1.0, expiry));
        assert_eq!(
            storage.add_lot(lot("Salt", f64::MAX, 1.0, expiry)),
            LotPlacement::Appended
        );

        let salt = storage.lots_for("Salt");
        assert_eq!(salt.len(), 2);
        assert!(salt.iter().all(|l| l.quantity() == f64::MAX));
    }

    #[test]
    fn test_remove_partial_then_all() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 5.0, 10.0, date(2024, 6, 1)));

        assert!(storage.remove_quantity("Apple", 3.0));
        assert_eq!(storage.lots_for("Apple")[0].quantity(), 2.0);

        assert!(storage.remove_quantity("Apple", 2.0));
        assert!(storage.lots_for("Apple").is_empty());
        assert!(storage.is_empty(), "emptied name must be dropped");
    }

    #[test]
    fn test_remove_whole_lot_drops_name() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 5.0, 10.0, date(2024, 6, 1)));

        assert!(storage.remove_quantity("Apple", 5.0));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_remove_more_than_stored_is_atomic() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 5.0, 10.0, date(2024, 6, 1)));
        let before = storage.clone();

        assert!(!storage.remove_quantity("Apple", 6.0));
        assert_eq!(storage, before);
    }

    #[test]
    fn test_remove_unknown_name_fails() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 5.0, 10.0, date(2024, 6, 1)));
        let before = storage.clone();

        assert!(!storage.remove_quantity("Pear", 1.0));
        assert!(!storage.remove_quantity("Apple", -1.0));
        assert_eq!(storage, before);
    }

    #[test]
    fn test_remove_depletes_oldest_first() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Milk", 1.0, 15.0, date(2024, 6, 3)));
        storage.add_lot(lot("Milk", 2.0, 15.0, date(2024, 6, 1)));
        storage.add_lot(lot("Milk", 4.0, 15.0, date(2024, 6, 5)));

        assert!(storage.remove_quantity("Milk", 2.5));

        // Insertion order, not expiry order: the 1.0 lot goes, the 2.0 lot is cut to 0.5.
        let milk = storage.lots_for("Milk");
        assert_eq!(milk.len(), 2);
        assert_eq!(milk[0].expiry_date(), date(2024, 6, 1));
        assert_eq!(milk[0].quantity(), 0.5);
        assert_eq!(milk[1].quantity(), 4.0);
    }

    #[test]
    fn test_expired_lots_and_values() {
        let today = date(2024, 6, 10);
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Apple", 2.0, 10.0, date(2024, 6, 9)));
        storage.add_lot(lot("Apple", 1.0, 12.0, date(2024, 6, 10)));
        storage.add_lot(lot("Bread", 1.0, 30.0, date(2024, 6, 1)));

        let expired = storage.expired_lots(today);
        assert_eq!(expired.len(), 2);
        assert!(expired.iter().all(|l| l.expiry_date() < today));

        assert_eq!(storage.total_value(), 20.0 + 12.0 + 30.0);
        assert_eq!(storage.total_expired_value(today), 20.0 + 30.0);
    }

    #[test]
    fn test_all_lots_is_stable() {
        let mut storage = FoodStorage::new();
        storage.add_lot(lot("Milk", 1.0, 15.0, date(2024, 6, 3)));
        storage.add_lot(lot("Eggs", 12.0, 2.0, date(2024, 6, 1)));
        storage.add_lot(lot("Milk", 2.0, 15.0, date(2024, 6, 4)));

        let first = storage.all_lots();
        assert_eq!(first, storage.all_lots());
        let names: Vec<_> = first.iter().map(Grocery::name).collect();
        assert_eq!(names, vec!["Eggs", "Milk", "Milk"]);
        assert_eq!(storage.len(), 3);
    }
}
