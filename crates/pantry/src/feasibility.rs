//! # Recipe Feasibility
//!
//! Decides which recipes can be cooked from a snapshot of inventory lots. Quantities are
//! summed per item name across lots; whether expired lots count is up to the
//! [`ExpiryPolicy`].

use crate::model::{Grocery, Recipe};
use crate::rules;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether expired lots may be used when checking a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryPolicy {
    /// Only lots that have not expired count.
    #[default]
    FreshOnly,
    /// Every lot counts.
    IncludeExpired,
}

impl From<bool> for ExpiryPolicy {
    fn from(include_expired: bool) -> Self {
        if include_expired {
            Self::IncludeExpired
        } else {
            Self::FreshOnly
        }
    }
}

/// Total usable quantity per item name.
pub fn available_quantities(
    lots: &[Grocery],
    policy: ExpiryPolicy,
    today: NaiveDate,
) -> BTreeMap<String, f64> {
    let mut available = BTreeMap::new();
    for lot in lots {
        if policy == ExpiryPolicy::FreshOnly && rules::is_expired(lot, today) {
            continue;
        }
        *available.entry(lot.name().to_string()).or_insert(0.0) += lot.quantity();
    }
    available
}

/// The recipes whose every ingredient is available in at least the required quantity,
/// in the order given.
///
/// An ingredient with no usable lot makes its recipe infeasible. A recipe without
/// ingredients is always feasible.
pub fn possible_recipes(
    recipes: &[Recipe],
    lots: &[Grocery],
    policy: ExpiryPolicy,
    today: NaiveDate,
) -> Vec<Recipe> {
    let available = available_quantities(lots, policy, today);
    recipes
        .iter()
        .filter(|recipe| {
            recipe.ingredients().iter().all(|(name, &required)| {
                available
                    .get(name)
                    .is_some_and(|&on_hand| on_hand >= required)
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredients, RecipeCreate, RecipeId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recipe(id: u32, name: &str, ingredients: &[(&str, f64)]) -> Recipe {
        let ingredients: Ingredients = ingredients
            .iter()
            .map(|(n, q)| (n.to_string(), *q))
            .collect();
        let create = RecipeCreate::new(name, "", "", ingredients, 1).unwrap();
        Recipe::from_create(RecipeId(id), create)
    }

    fn lot(name: &str, quantity: f64, expiry: NaiveDate) -> Grocery {
        Grocery::new(name, quantity, "units", 1.0, expiry).unwrap()
    }

    #[test]
    fn test_pancakes_are_possible() {
        let today = date(2024, 5, 1);
        let lots = vec![
            lot("Milk", 2.0, date(2024, 5, 6)),
            lot("Eggs", 12.0, date(2024, 5, 11)),
            lot("Flour", 1.0, date(2024, 11, 1)),
        ];
        let recipes = vec![recipe(
            1,
            "Pancakes",
            &[("Milk", 1.5), ("Eggs", 2.0), ("Flour", 0.5)],
        )];

        let possible = possible_recipes(&recipes, &lots, ExpiryPolicy::FreshOnly, today);
        assert_eq!(possible.len(), 1);
        assert_eq!(possible[0].name(), "Pancakes");
    }

    #[test]
    fn test_quantities_sum_across_lots() {
        let today = date(2024, 5, 1);
        let lots = vec![
            lot("Milk", 1.0, date(2024, 5, 6)),
            lot("Milk", 0.5, date(2024, 5, 7)),
        ];
        let recipes = vec![recipe(1, "Latte", &[("Milk", 1.5)])];

        assert_eq!(
            possible_recipes(&recipes, &lots, ExpiryPolicy::FreshOnly, today).len(),
            1
        );
    }

    #[test]
    fn test_expired_lots_follow_policy() {
        let today = date(2024, 5, 10);
        let lots = vec![lot("Milk", 2.0, date(2024, 5, 6))];
        let recipes = vec![recipe(1, "Milkshake", &[("Milk", 1.0)])];

        assert!(possible_recipes(&recipes, &lots, ExpiryPolicy::FreshOnly, today).is_empty());
        assert_eq!(
            possible_recipes(&recipes, &lots, ExpiryPolicy::IncludeExpired, today).len(),
            1
        );
    }

    #[test]
    fn test_expired_lot_completes_the_sum() {
        let today = date(2024, 5, 10);
        let lots = vec![
            lot("Milk", 1.0, date(2024, 5, 9)),
            lot("Milk", 1.0, date(2024, 5, 12)),
        ];
        let recipes = vec![recipe(1, "Latte", &[("Milk", 1.5)])];

        assert!(possible_recipes(&recipes, &lots, ExpiryPolicy::FreshOnly, today).is_empty());
        assert_eq!(
            possible_recipes(&recipes, &lots, ExpiryPolicy::IncludeExpired, today).len(),
            1
        );
        assert_eq!(
            available_quantities(&lots, ExpiryPolicy::FreshOnly, today).get("Milk"),
            Some(&1.0)
        );
    }

    #[test]
    fn test_missing_or_short_ingredient_excludes_recipe() {
        let today = date(2024, 5, 1);
        let lots = vec![lot("Eggs", 1.0, date(2024, 5, 11))];
        let recipes = vec![
            recipe(1, "Omelette", &[("Eggs", 3.0)]),
            recipe(2, "Bread", &[("Flour", 1.0)]),
            recipe(3, "Water", &[]),
            recipe(4, "Boiled egg", &[("Eggs", 1.0)]),
        ];

        let names: Vec<_> = possible_recipes(&recipes, &lots, ExpiryPolicy::FreshOnly, today)
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["Water", "Boiled egg"]);
    }

    #[test]
    fn test_policy_from_bool() {
        assert_eq!(ExpiryPolicy::from(true), ExpiryPolicy::IncludeExpired);
        assert_eq!(ExpiryPolicy::from(false), ExpiryPolicy::FreshOnly);
    }
}
