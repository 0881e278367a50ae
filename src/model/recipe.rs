use super::{Ingredient, Step};
use serde::{Deserialize, Serialize};

fn one_serving() -> u32 {
    1
}

/// The recipe document: every recipe the application knows about.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeBook {
    /// Recipes in document order.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Find a recipe by name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.name.eq_ignore_ascii_case(name))
    }

    /// Names of all recipes, for the landing page.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|recipe| recipe.name.as_str())
    }

    /// Whether the book holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// A single recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Display name, also used for lookups.
    pub name: String,

    /// Short blurb shown on the start screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hero image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Number of servings the ingredient amounts are written for.
    #[serde(default = "one_serving")]
    pub servings: u32,

    /// Ingredients with their base amounts.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    /// Cooking steps in order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Ingredients with every amount scaled by `ratio`.
    #[must_use]
    pub fn scaled_ingredients(&self, ratio: f64) -> Vec<Ingredient> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.scaled(ratio))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const DOCUMENT: &str = indoc! {r#"
        {
          "recipes": [
            { "name": "Hummingbird Muffins", "servings": 12, "imageUrl": "/images/muffins.jpg" },
            { "name": "Pancakes" }
          ]
        }
    "#};

    #[test]
    fn defaults() {
        let book: RecipeBook = serde_json::from_str(DOCUMENT).unwrap();
        let pancakes = book.find("Pancakes").unwrap();
        assert_eq!(pancakes.servings, 1);
        assert!(pancakes.ingredients.is_empty());
        assert!(pancakes.steps.is_empty());
        assert_eq!(pancakes.description, None);
    }

    #[test]
    fn camel_case_keys() {
        let book: RecipeBook = serde_json::from_str(DOCUMENT).unwrap();
        let muffins = &book.recipes[0];
        assert_eq!(muffins.image_url.as_deref(), Some("/images/muffins.jpg"));
        assert_eq!(muffins.servings, 12);
    }

    #[test]
    fn find_ignores_case() {
        let book: RecipeBook = serde_json::from_str(DOCUMENT).unwrap();
        assert!(book.find("hummingbird muffins").is_some());
        assert!(book.find("Waffles").is_none());
        assert_eq!(
            book.names().collect::<Vec<_>>(),
            vec!["Hummingbird Muffins", "Pancakes"]
        );
    }

    #[test]
    fn empty_document() {
        let book: RecipeBook = serde_json::from_str("{}").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn skips_empty_optionals_when_written() {
        let book: RecipeBook = serde_json::from_str(DOCUMENT).unwrap();
        let written = serde_json::to_string(&book.recipes[1]).unwrap();
        assert_eq!(
            written,
            r#"{"name":"Pancakes","servings":1,"ingredients":[],"steps":[]}"#
        );
    }
}
