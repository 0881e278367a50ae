//! Where recipes come from and where new ones go.
//!
//! A [`RecipeProvider`] hands out recipes by name. A [`RecipeStore`] additionally supports a
//! read-modify-write of the whole document; concurrent writers overwrite each other and the last
//! one wins.
//!
//! Stored recipes are kept exactly as they were submitted. Only reading them through a
//! [`RecipeProvider`] applies the recipe model, and recipes that don't fit it are skipped there.
use crate::error::{Error, PayloadError};
use crate::model::{Recipe, RecipeBook};
use crate::parser::{DocumentFormat, parse_document, write_document};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source of recipes by name.
pub trait RecipeProvider {
    /// Look up a recipe.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeNotFound`][`Error::RecipeNotFound`] when there is no such recipe, or
    /// whatever reading the recipes failed with.
    fn recipe(&self, name: &str) -> Result<Recipe, Error>;

    /// Names of all recipes, in document order.
    ///
    /// # Errors
    ///
    /// Returns whatever reading the recipes failed with.
    fn recipe_names(&self) -> Result<Vec<String>, Error>;
}

impl RecipeProvider for RecipeBook {
    fn recipe(&self, name: &str) -> Result<Recipe, Error> {
        self.find(name)
            .cloned()
            .ok_or_else(|| Error::RecipeNotFound(name.to_string()))
    }

    fn recipe_names(&self) -> Result<Vec<String>, Error> {
        Ok(self.names().map(String::from).collect())
    }
}

/// A stored recipe document.
///
/// Recipes and any other top-level keys are kept as written, whatever their shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    /// Recipes in document order, untouched.
    pub recipes: Vec<Value>,

    /// Other top-level keys.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl StoredDocument {
    /// The recipes that fit the recipe model. The others are skipped with a warning.
    #[must_use]
    pub fn book(&self) -> RecipeBook {
        let recipes = self
            .recipes
            .iter()
            .enumerate()
            .filter_map(
                |(index, value)| match serde_json::from_value::<Recipe>(value.clone()) {
                    Ok(recipe) => Some(recipe),
                    Err(err) => {
                        log::warn!("skipping stored recipe #{index}: {err}");
                        None
                    }
                },
            )
            .collect();
        RecipeBook { recipes }
    }
}

/// A recipe document that can be read and overwritten.
pub trait RecipeStore {
    /// Read the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`][`Error::StoreError`] when the document can't be read.
    fn load(&self) -> Result<StoredDocument, Error>;

    /// Overwrite the whole document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`][`Error::StoreError`] when the document can't be written.
    fn save(&self, document: &StoredDocument) -> Result<(), Error>;

    /// Add a recipe at the end of the document, keeping everything already there.
    ///
    /// # Errors
    ///
    /// Returns whatever [`load`][`Self::load`] or [`save`][`Self::save`] fail with.
    fn append(&self, recipe: Value) -> Result<(), Error> {
        let mut document = self.load()?;
        document.recipes.push(recipe);
        self.save(&document)
    }
}

/// A recipe document kept in a single file.
///
/// The format follows the extension, see [`DocumentFormat::from_path`]. A missing file reads as
/// an empty document, and so does one without a `recipes` array (with a warning); the next save
/// replaces it.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileStore {
    /// A store backed by the file at `path`. The file doesn't have to exist yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    /// Location of the document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecipeStore for FileStore {
    fn load(&self) -> Result<StoredDocument, Error> {
        let source = match std::fs::read_to_string(&self.path) {
            Ok(source) => source,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "{} does not exist yet, starting empty",
                    self.path.display()
                );
                return Ok(StoredDocument::default());
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("reading recipe document {}", self.path.display()))
                    .into());
            }
        };

        Ok(
            parse_document(&source, self.format).unwrap_or_else(|err| {
                log::warn!("{} is malformed, resetting: {err}", self.path.display());
                StoredDocument::default()
            }),
        )
    }

    fn save(&self, document: &StoredDocument) -> Result<(), Error> {
        let contents = write_document(document, self.format)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("writing recipe document {}", self.path.display()))?;
        Ok(())
    }
}

impl RecipeProvider for FileStore {
    fn recipe(&self, name: &str) -> Result<Recipe, Error> {
        self.load()?.book().recipe(name)
    }

    fn recipe_names(&self) -> Result<Vec<String>, Error> {
        self.load()?.book().recipe_names()
    }
}

#[derive(Deserialize)]
struct SaveRequest {
    recipe: Option<Value>,
}

#[derive(Deserialize)]
struct SubmittedDocument {
    recipes: Option<Vec<Value>>,
}

/// Handle a save request: append the submitted recipe to `store`.
///
/// The body is `{ "recipe": "<recipe document as a JSON string>" }`, where the document has the
/// usual `{ "recipes": [...] }` shape. Only its first recipe is saved, as submitted. Returns the
/// saved recipe.
///
/// # Errors
///
/// Returns [`InvalidPayload`][`Error::InvalidPayload`] when the body is rejected (see
/// [`PayloadError`]), or the store's error when appending fails.
pub fn save_recipe<S: RecipeStore + ?Sized>(store: &S, body: &str) -> Result<Value, Error> {
    let request: SaveRequest = serde_json::from_str(body).map_err(PayloadError::MalformedBody)?;

    let Some(Value::String(document)) = request.recipe else {
        return Err(PayloadError::MissingRecipe.into());
    };
    if document.is_empty() {
        return Err(PayloadError::MissingRecipe.into());
    }

    let submitted: SubmittedDocument = serde_json::from_str::<Value>(&document)
        .map_err(PayloadError::InvalidRecipeJson)
        .and_then(|value| {
            serde_json::from_value(value).map_err(|_| PayloadError::InvalidStructure)
        })?;

    let recipe = submitted
        .recipes
        .and_then(|recipes| recipes.into_iter().next())
        .ok_or(PayloadError::InvalidStructure)?;

    store.append(recipe.clone())?;
    log::debug!("saved recipe {:?}", recipe.get("name"));
    Ok(recipe)
}
