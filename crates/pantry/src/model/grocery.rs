use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

/// Validation failures raised while building or mutating a [`Grocery`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GroceryError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Quantity cannot be negative: {0}")]
    InvalidQuantity(f64),

    #[error("Price per unit cannot be negative: {0}")]
    InvalidPrice(f64),
}

/// One batch ("lot") of a grocery item in the inventory.
///
/// Lots are created by the caller when stock arrives and handed to
/// [`FoodStorage`](crate::model::FoodStorage), which may merge them into an existing lot.
/// The constructor is the only place a lot is validated; once built, its quantity can only
/// move through [`Grocery::set_quantity`], which keeps it non-negative and finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grocery {
    name: String,
    quantity: f64,
    unit: String,
    price_per_unit: f64,
    expiry_date: NaiveDate,
}

impl Grocery {
    /// Creates a new lot.
    ///
    /// # Arguments
    /// * `name` - Item name, used as the inventory key
    /// * `quantity` - Amount in `unit`s
    /// * `unit` - Free-form unit ("liters", "kg", "pieces")
    /// * `price_per_unit` - Price of one unit, in NOK
    /// * `expiry_date` - Last day the lot is good
    ///
    /// # Errors
    /// Fails on an empty name, or a negative or non-finite quantity or price.
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        price_per_unit: f64,
        expiry_date: NaiveDate,
    ) -> Result<Self, GroceryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GroceryError::EmptyName);
        }
        check_quantity(quantity)?;
        if !price_per_unit.is_finite() || price_per_unit < 0.0 {
            return Err(GroceryError::InvalidPrice(price_per_unit));
        }
        Ok(Self {
            name,
            quantity,
            unit: unit.into(),
            price_per_unit,
            expiry_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn price_per_unit(&self) -> f64 {
        self.price_per_unit
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Replaces the quantity.
    ///
    /// # Errors
    /// Fails with [`GroceryError::InvalidQuantity`] on a negative or non-finite value, leaving
    /// the lot untouched.
    pub fn set_quantity(&mut self, quantity: f64) -> Result<(), GroceryError> {
        check_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    /// Merges the quantity of a clubbable lot into this one.
    ///
    /// # Errors
    /// Fails if the sum is not finite, leaving this lot untouched.
    pub(crate) fn absorb(&mut self, other: &Grocery) -> Result<(), GroceryError> {
        self.set_quantity(self.quantity + other.quantity)
    }

    /// Takes `amount` off this lot. Callers ensure `amount` is less than what the lot holds.
    pub(crate) fn deplete(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0 && amount <= self.quantity);
        self.quantity -= amount;
    }
}

fn check_quantity(quantity: f64) -> Result<(), GroceryError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(GroceryError::InvalidQuantity(quantity));
    }
    Ok(())
}

impl Display for Grocery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.2} {}, NOK {:.2}/unit, Expiry: {}",
            self.name, self.quantity, self.unit, self.price_per_unit, self.expiry_date
        )
    }
}
