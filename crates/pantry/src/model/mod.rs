mod cookbook;
mod food_storage;
mod grocery;
mod recipe;

pub use cookbook::Cookbook;
pub use food_storage::{FoodStorage, LotPlacement};
pub use grocery::{Grocery, GroceryError};
pub use recipe::{Ingredients, Recipe, RecipeCreate, RecipeError, RecipeId, RecipeUpdate};
