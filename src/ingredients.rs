//! The ingredients screen: scaled amounts and the shopping checklist.
use crate::model::Ingredient;
use crate::scaler::{scale, serving_ratio};

/// An ingredient name with the amount to show for the current serving size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaledIngredient<'a> {
    /// Ingredient name, borrowed from the input.
    pub name: &'a str,
    /// Scaled amount.
    pub amount: String,
}

/// Scale `(name, base amount)` pairs from `base_servings` to `servings`.
///
/// ```
/// use recipe_walkthrough::ingredients::scale_ingredients;
///
/// let scaled = scale_ingredients([("Flour", "1 and 1/2 cups"), ("Salt", "to taste")], 4, 8);
/// assert_eq!(scaled[0].amount, "3 cups");
/// assert_eq!(scaled[1].amount, "to taste");
/// ```
pub fn scale_ingredients<'a, I>(
    ingredients: I,
    base_servings: u32,
    servings: u32,
) -> Vec<ScaledIngredient<'a>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let ratio = serving_ratio(base_servings, servings);
    ingredients
        .into_iter()
        .map(|(name, amount)| ScaledIngredient {
            name,
            amount: scale(amount, ratio),
        })
        .collect()
}

#[derive(Clone, Debug)]
struct Entry {
    ingredient: Ingredient,
    selected: bool,
    alternatives_selected: Vec<bool>,
    expanded: bool,
}

/// Checklist state of the ingredients screen.
///
/// Each ingredient can be ticked, or one of its alternatives can be ticked instead; never both.
#[derive(Clone, Debug)]
pub struct IngredientChecklist {
    entries: Vec<Entry>,
}

impl IngredientChecklist {
    /// A checklist with nothing ticked and every dropdown closed.
    #[must_use]
    pub fn new(ingredients: &[Ingredient]) -> Self {
        Self {
            entries: ingredients
                .iter()
                .map(|ingredient| Entry {
                    ingredient: ingredient.clone(),
                    selected: false,
                    alternatives_selected: vec![false; ingredient.alternatives.len()],
                    expanded: false,
                })
                .collect(),
        }
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.ingredient.id == id)
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.ingredient.id == id)
    }

    /// Tick or untick an ingredient. Its alternatives are unticked either way.
    pub fn toggle_ingredient(&mut self, id: &str) {
        if let Some(entry) = self.entry_mut(id) {
            entry.selected = !entry.selected;
            entry.alternatives_selected.fill(false);
        }
    }

    /// Tick or untick an alternative. The ingredient itself and the other alternatives are
    /// unticked.
    pub fn toggle_alternative(&mut self, ingredient_id: &str, alternative_id: &str) {
        let Some(entry) = self.entry_mut(ingredient_id) else {
            return;
        };
        let Some(index) = entry
            .ingredient
            .alternatives
            .iter()
            .position(|alternative| alternative.id == alternative_id)
        else {
            return;
        };

        let now_selected = !entry.alternatives_selected[index];
        entry.selected = false;
        for (i, selected) in entry.alternatives_selected.iter_mut().enumerate() {
            *selected = i == index && now_selected;
        }
    }

    /// Open or close the alternatives dropdown of an ingredient.
    pub fn toggle_dropdown(&mut self, id: &str) {
        if let Some(entry) = self.entry_mut(id) {
            entry.expanded = !entry.expanded;
        }
    }

    /// Whether the ingredient is ticked.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.entry(id).is_some_and(|entry| entry.selected)
    }

    /// Whether the alternative is ticked.
    #[must_use]
    pub fn is_alternative_selected(&self, ingredient_id: &str, alternative_id: &str) -> bool {
        self.entry(ingredient_id).is_some_and(|entry| {
            entry
                .ingredient
                .alternatives
                .iter()
                .zip(&entry.alternatives_selected)
                .any(|(alternative, selected)| *selected && alternative.id == alternative_id)
        })
    }

    /// Whether the alternatives dropdown is open. Ingredients without alternatives never are.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.entry(id)
            .is_some_and(|entry| entry.expanded && !entry.ingredient.alternatives.is_empty())
    }

    /// Names of everything ticked, ingredients and alternatives, in list order.
    #[must_use]
    pub fn chosen(&self) -> Vec<&str> {
        let mut chosen = Vec::new();
        for entry in &self.entries {
            if entry.selected {
                chosen.push(entry.ingredient.name.as_str());
            }
            for (alternative, selected) in entry
                .ingredient
                .alternatives
                .iter()
                .zip(&entry.alternatives_selected)
            {
                if *selected {
                    chosen.push(alternative.name.as_str());
                }
            }
        }
        chosen
    }

    /// Amounts of every ingredient for `servings`, given amounts written for `base_servings`.
    #[must_use]
    pub fn display_amounts(&self, base_servings: u32, servings: u32) -> Vec<ScaledIngredient<'_>> {
        scale_ingredients(
            self.entries.iter().map(|entry| {
                (
                    entry.ingredient.name.as_str(),
                    entry.ingredient.amount.as_str(),
                )
            }),
            base_servings,
            servings,
        )
    }
}
