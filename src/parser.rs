//! Recipe document parsing and the bundled demo document.
//!
//! The bundled document is parsed once and reused throughout the application.

use crate::error::Error;
use crate::model::RecipeBook;
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::OnceLock;

const BUNDLED_DOCUMENT: &str = include_str!("../data/demo_recipes.json");

static BUNDLED: OnceLock<RecipeBook> = OnceLock::new();

/// Serialization format of a recipe document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON, the default.
    #[default]
    Json,
    /// YAML with the same keys as the JSON form.
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `yaml`/`yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Parse a recipe document.
///
/// # Errors
///
/// Returns [`DocumentParseError`][`Error::DocumentParseError`] or
/// [`YamlParseError`][`Error::YamlParseError`] when `source` doesn't match the recipe model.
pub fn parse_book(source: &str, format: DocumentFormat) -> Result<RecipeBook, Error> {
    parse_document(source, format)
}

/// Parse a document of any shape, e.g. a [`serde_json::Value`].
///
/// # Errors
///
/// Fails like [`parse_book`] when `source` doesn't match `T`.
pub fn parse_document<T: DeserializeOwned>(
    source: &str,
    format: DocumentFormat,
) -> Result<T, Error> {
    Ok(match format {
        DocumentFormat::Json => serde_json::from_str(source)?,
        DocumentFormat::Yaml => serde_yaml::from_str(source)?,
    })
}

/// Write a recipe document. JSON is pretty-printed with two-space indentation.
///
/// # Errors
///
/// Returns the serializer's error wrapped like [`parse_book`] does.
pub fn write_book(book: &RecipeBook, format: DocumentFormat) -> Result<String, Error> {
    write_document(book, format)
}

/// Write a document of any shape, formatted like [`write_book`] does.
///
/// # Errors
///
/// Returns the serializer's error wrapped like [`parse_book`] does.
pub fn write_document<T: Serialize + ?Sized>(
    document: &T,
    format: DocumentFormat,
) -> Result<String, Error> {
    Ok(match format {
        DocumentFormat::Json => serde_json::to_string_pretty(document)?,
        DocumentFormat::Yaml => serde_yaml::to_string(document)?,
    })
}

/// Get the recipe document shipped with the crate.
///
/// This function is thread-safe and will only parse the document once.
///
/// # Example
/// ```
/// use recipe_walkthrough::parser::bundled_book;
///
/// let book = bundled_book();
/// assert!(book.find("Hummingbird Muffins").is_some());
/// ```
pub fn bundled_book() -> &'static RecipeBook {
    BUNDLED.get_or_init(|| {
        parse_book(BUNDLED_DOCUMENT, DocumentFormat::Json).unwrap_or_else(|err| {
            log::error!("bundled recipe document is invalid: {err}");
            RecipeBook::default()
        })
    })
}
