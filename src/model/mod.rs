//! Recipe document model.
//!
//! The types deserialize from the recipe document (JSON with camelCase keys, or the same
//! shape in YAML) and convert into [`minijinja::Value`]s for templates.
mod ingredient;
mod recipe;
mod step;
mod timer;

pub use ingredient::{Alternative, Ingredient};
pub use recipe::{Recipe, RecipeBook};
pub use step::{NumberedStep, Step};
pub use timer::Timer;
