use crate::feasibility::{self, ExpiryPolicy};
use crate::model::{Grocery, Recipe, RecipeCreate, RecipeError, RecipeId, RecipeUpdate};
use chrono::NaiveDate;

/// Ordered catalog of recipes. Owns id assignment: ids start at 1 and are never reused.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cookbook {
    recipes: Vec<Recipe>,
    last_id: u32,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a recipe and returns its new id.
    pub fn add_recipe(&mut self, params: RecipeCreate) -> RecipeId {
        self.last_id += 1;
        let id = RecipeId(self.last_id);
        self.recipes.push(Recipe::from_create(id, params));
        id
    }

    /// Recipes in insertion order.
    pub fn all_recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id() == id)
    }

    /// Applies `update` to the recipe with `id`.
    ///
    /// # Errors
    /// [`RecipeError::NotFound`] for an unknown id, or the validation error of the first bad
    /// field. Either way nothing changes.
    pub fn update_recipe(
        &mut self,
        id: RecipeId,
        update: RecipeUpdate,
    ) -> Result<&Recipe, RecipeError> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|recipe| recipe.id() == id)
            .ok_or(RecipeError::NotFound(id))?;
        recipe.apply(update)?;
        Ok(recipe)
    }

    /// Catalog recipes that can be cooked from `lots`. See [`feasibility::possible_recipes`].
    pub fn possible_recipes(
        &self,
        lots: &[Grocery],
        policy: ExpiryPolicy,
        today: NaiveDate,
    ) -> Vec<Recipe> {
        feasibility::possible_recipes(&self.recipes, lots, policy, today)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredients;

    fn create(name: &str, ingredients: &[(&str, f64)]) -> RecipeCreate {
        let ingredients: Ingredients = ingredients
            .iter()
            .map(|(n, q)| (n.to_string(), *q))
            .collect();
        RecipeCreate::new(name, "", "", ingredients, 2).unwrap()
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut cookbook = Cookbook::new();
        assert_eq!(cookbook.add_recipe(create("Toast", &[])), RecipeId(1));
        assert_eq!(cookbook.add_recipe(create("Tea", &[])), RecipeId(2));

        let names: Vec<_> = cookbook.all_recipes().iter().map(Recipe::name).collect();
        assert_eq!(names, vec!["Toast", "Tea"]);
        assert_eq!(cookbook.recipe(RecipeId(2)).map(Recipe::name), Some("Tea"));
        assert!(cookbook.recipe(RecipeId(3)).is_none());

        // Reading the catalog does not change it.
        assert_eq!(cookbook.all_recipes(), cookbook.all_recipes());
        assert_eq!(cookbook.len(), 2);
    }

    #[test]
    fn test_update_recipe() {
        let mut cookbook = Cookbook::new();
        let id = cookbook.add_recipe(create("Toast", &[("Bread", 1.0)]));

        let update = RecipeUpdate {
            description: Some("Crispy".to_string()),
            ..Default::default()
        };
        let updated = cookbook.update_recipe(id, update).unwrap();
        assert_eq!(updated.description(), "Crispy");

        let missing = cookbook.update_recipe(RecipeId(99), RecipeUpdate::default());
        assert_eq!(missing, Err(RecipeError::NotFound(RecipeId(99))));

        let bad = RecipeUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cookbook.update_recipe(id, bad), Err(RecipeError::EmptyName));
        assert_eq!(cookbook.recipe(id).map(Recipe::name), Some("Toast"));
    }

    #[test]
    fn test_possible_recipes_keeps_catalog_order() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2024, 5, 5).unwrap();
        let mut cookbook = Cookbook::new();
        cookbook.add_recipe(create("Omelette", &[("Eggs", 3.0)]));
        cookbook.add_recipe(create("Cake", &[("Eggs", 4.0), ("Flour", 1.0)]));
        cookbook.add_recipe(create("Boiled egg", &[("Eggs", 1.0)]));

        let lots = vec![Grocery::new("Eggs", 3.0, "pieces", 2.0, expiry).unwrap()];
        let names: Vec<_> = cookbook
            .possible_recipes(&lots, ExpiryPolicy::FreshOnly, today)
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["Omelette", "Boiled egg"]);
    }
}
