//! Model for ingredient.
use crate::scaler::scale;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An ingredient line with its base amount and possible substitutes.
///
/// # Usage
///
/// Can be converted into [`minijinja::Value`]. If you have an `ingredient`, the following are
/// valid ways to use it:
///
/// ```text
/// {{ ingredient }}
/// {{ ingredient.id }}
/// {{ ingredient.name }}
/// {{ ingredient.amount }}
/// {% for alternative in ingredient.alternatives %}{{ alternative }}{% endfor %}
/// ```
///
/// `{{ ingredient }}` renders as `name (amount)`, or just the name when there is no amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Stable identifier used by the checklist.
    #[serde(default)]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form quantity, e.g. `1 and 1/2 cups`.
    #[serde(default)]
    pub amount: String,

    /// Ingredients that can be used instead.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<Alternative>,
}

/// A substitute for an [`Ingredient`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Stable identifier used by the checklist.
    #[serde(default)]
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-form quantity.
    #[serde(default)]
    pub amount: String,
}

impl Ingredient {
    /// Copy of this ingredient with its amount, and those of its alternatives, scaled by `ratio`.
    #[must_use]
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            amount: scale(&self.amount, ratio),
            alternatives: self
                .alternatives
                .iter()
                .map(|alternative| Alternative {
                    id: alternative.id.clone(),
                    name: alternative.name.clone(),
                    amount: scale(&alternative.amount, ratio),
                })
                .collect(),
        }
    }
}

fn write_name_and_amount(
    f: &mut std::fmt::Formatter<'_>,
    name: &str,
    amount: &str,
) -> std::fmt::Result {
    if amount.is_empty() {
        write!(f, "{name}")
    } else {
        write!(f, "{name} ({amount})")
    }
}

impl Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_name_and_amount(f, &self.name, &self.amount)
    }
}

impl Display for Alternative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_name_and_amount(f, &self.name, &self.amount)
    }
}

impl From<Ingredient> for minijinja::Value {
    fn from(value: Ingredient) -> Self {
        Self::from_object(value)
    }
}

impl From<Alternative> for minijinja::Value {
    fn from(value: Alternative) -> Self {
        Self::from_object(value)
    }
}

impl minijinja::value::Object for Ingredient {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "id" => Some(minijinja::Value::from(&self.id)),
            "name" => Some(minijinja::Value::from(&self.name)),
            "amount" => Some(minijinja::Value::from(&self.amount)),
            "alternatives" => Some(minijinja::Value::from(
                self.alternatives
                    .iter()
                    .cloned()
                    .map(minijinja::Value::from)
                    .collect::<Vec<_>>(),
            )),
            _ => None,
        }
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        Self: Sized + 'static,
    {
        self.fmt(f)
    }
}

impl minijinja::value::Object for Alternative {
    fn repr(self: &std::sync::Arc<Self>) -> minijinja::value::ObjectRepr {
        minijinja::value::ObjectRepr::Plain
    }

    fn get_value(self: &std::sync::Arc<Self>, key: &minijinja::Value) -> Option<minijinja::Value> {
        match key.as_str()? {
            "id" => Some(minijinja::Value::from(&self.id)),
            "name" => Some(minijinja::Value::from(&self.name)),
            "amount" => Some(minijinja::Value::from(&self.amount)),
            _ => None,
        }
    }

    fn render(self: &std::sync::Arc<Self>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    where
        Self: Sized + 'static,
    {
        self.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::get_book_and_env;
    use minijinja::{Value, context};
    use test_case::test_case;

    const FLOUR: &str = r#"{ "recipes": [ { "name": "Muffins", "ingredients": [
        { "id": "flour", "name": "All-Purpose Flour", "amount": "1 and 1/2 cups",
          "alternatives": [ { "id": "whole-wheat", "name": "Whole Wheat Flour", "amount": "1 and 1/4 cups" } ] },
        { "id": "salt", "name": "Salt" }
    ] } ] }"#;

    #[test_case("{{ ingredient }}", "All-Purpose Flour (1 and 1/2 cups)"; "display")]
    #[test_case("{{ ingredient.id }}", "flour"; "id")]
    #[test_case("{{ ingredient.name }}", "All-Purpose Flour"; "name")]
    #[test_case("{{ ingredient.amount }}", "1 and 1/2 cups"; "amount")]
    #[test_case("{% for alt in ingredient.alternatives %}{{ alt }}{% endfor %}",
        "Whole Wheat Flour (1 and 1/4 cups)"; "alternatives")]
    #[test_case("{{ ingredient.alternatives[0].amount }}", "1 and 1/4 cups"; "alternative amount")]
    fn ingredient(template: &str, expected: &str) {
        let (book, env) = get_book_and_env(FLOUR, template);

        let context = context! {
            ingredient => Value::from(book.recipes[0].ingredients[0].clone())
        };

        let template = env.get_template("test").unwrap();
        assert_eq!(expected, template.render(context).unwrap());
    }

    #[test]
    fn without_amount() {
        let (book, env) = get_book_and_env(FLOUR, "{{ ingredient }}");
        let context = context! {
            ingredient => Value::from(book.recipes[0].ingredients[1].clone())
        };
        let template = env.get_template("test").unwrap();
        assert_eq!("Salt", template.render(context).unwrap());
    }

    #[test]
    fn scaled_includes_alternatives() {
        let (book, _) = get_book_and_env(FLOUR, "");
        let doubled = book.recipes[0].ingredients[0].scaled(2.0);
        assert_eq!(doubled.amount, "3 cups");
        assert_eq!(doubled.alternatives[0].amount, "2 1/2 cups");
        assert_eq!(doubled.name, "All-Purpose Flour");
    }

    #[test]
    fn scaled_keeps_missing_amount() {
        let (book, _) = get_book_and_env(FLOUR, "");
        assert_eq!(book.recipes[0].ingredients[1].scaled(3.0).amount, "");
    }
}
