//! A Rust library for step-by-step recipe walkthroughs.
//!
//! Recipes live in a JSON (or YAML) document. The library scales ingredient amounts to a serving
//! size, keeps the screen state of a walkthrough (start screen, ingredients checklist, step cards
//! with timers), stores new recipes, and renders a walkthrough through [Jinja2][00]-style
//! templates.
//!
//! [00]: https://jinja.palletsprojects.com/en/stable/
#[doc = include_str!("../README.md")]
use config::Config;
use filters::{amount_filter, countdown_filter, numeric_filter, scale_filter};
use functions::{scale_for_servings, serving_ratio_function};
use minijinja::{Environment, Value, context};
use model::{NumberedStep, Recipe, RecipeBook};
use parser::{DocumentFormat, parse_book};
use scaler::serving_ratio;
use store::RecipeProvider;

pub mod config;
pub mod error;
mod filters;
mod functions;
pub mod ingredients;
pub mod model;
pub mod parser;
pub mod scaler;
pub mod store;
pub mod walkthrough;

pub use error::Error;

/// Render the first recipe of a JSON document with the default configuration.
///
/// This is equivalent to calling [`render_template_with_config`] with a default [`Config`].
///
/// # Errors
///
/// Returns [`DocumentParseError`][`Error::DocumentParseError`] if the document cannot be parsed,
/// [`EmptyDocument`][`Error::EmptyDocument`] if it holds no recipe.
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_template(document: &str, template: &str) -> Result<String, Error> {
    render_template_with_config(document, template, &Config::default())
}

/// Render a recipe from a JSON document to a String with the provided [`Config`].
///
/// # Parameters
///
/// * `document` is a recipe document as a JSON string, ready to be parsed.
/// * `template` is a (hopefully valid) template. See [`render_book`] for its context.
/// * `config` is a [`Config`][`config::Config`] picking the recipe and the serving size.
///
/// # Errors
///
/// Returns [`DocumentParseError`][`Error::DocumentParseError`] if the document cannot be parsed.
///
/// Otherwise fails like [`render_book`].
pub fn render_template_with_config(
    document: &str,
    template: &str,
    config: &Config,
) -> Result<String, Error> {
    let book = parse_book(document, DocumentFormat::Json)?;
    render_book(&book, template, config)
}

/// Render a recipe of `book` through `template`.
///
/// The template sees:
///
/// * `recipe`: `name`, `description` and `image_url` of the rendered recipe
/// * `recipes`: names of every recipe in the book
/// * `servings`, `base_servings` and `scale` (their ratio)
/// * `ingredients`: scaled [ingredients][`model::Ingredient`]
/// * `steps`: numbered [steps][`model::NumberedStep`]
///
/// and the filters `scale`, `amount`, `numeric` and `countdown` and the functions
/// `serving_ratio` and `scale_for_servings`.
///
/// # Errors
///
/// Returns [`RecipeNotFound`][`Error::RecipeNotFound`] if the configured recipe is not in the
/// book and [`EmptyDocument`][`Error::EmptyDocument`] if no recipe is configured and the book is
/// empty.
///
/// Returns [`TemplateError`][`Error::TemplateError`] if the template has a syntax error or rendering fails.
pub fn render_book(book: &RecipeBook, template: &str, config: &Config) -> Result<String, Error> {
    let recipe = match &config.recipe {
        Some(name) => book.recipe(name)?,
        None => book.recipes.first().cloned().ok_or(Error::EmptyDocument)?,
    };

    let template_context = recipe_context(book, &recipe, config.servings);
    let template_environment = template_environment(template)?;

    let template: minijinja::Template<'_, '_> = template_environment.get_template("base")?;
    Ok(template.render(template_context)?)
}

/// Context passed to the template.
fn recipe_context(book: &RecipeBook, recipe: &Recipe, servings: Option<u32>) -> Value {
    let base_servings = recipe.servings;
    let servings = servings.unwrap_or(base_servings);
    let ratio = serving_ratio(base_servings, servings);

    let ingredients: Vec<Value> = recipe
        .scaled_ingredients(ratio)
        .into_iter()
        .map(Value::from)
        .collect();
    let steps: Vec<Value> = recipe
        .steps
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, step)| Value::from(NumberedStep::new(step, index + 1)))
        .collect();

    context! {
        recipe => context! {
            name => recipe.name.clone(),
            description => recipe.description.clone(),
            image_url => recipe.image_url.clone(),
        },
        recipes => book.names().collect::<Vec<_>>(),
        servings,
        base_servings,
        scale => ratio,
        ingredients,
        steps,
    }
}

/// Build an environment for the given template.
fn template_environment(template: &str) -> Result<Environment<'_>, Error> {
    let mut env = Environment::new();
    env.add_template("base", template)?;
    env.add_filter("scale", scale_filter);
    env.add_filter("amount", amount_filter);
    env.add_filter("numeric", numeric_filter);
    env.add_filter("countdown", countdown_filter);
    env.add_function("serving_ratio", serving_ratio_function);
    env.add_function("scale_for_servings", scale_for_servings);
    Ok(env)
}
