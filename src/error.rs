//! Error types for the recipe-walkthrough library.

use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The recipe document is not valid JSON for the recipe model.
    #[error("error parsing recipe document")]
    DocumentParseError(#[from] serde_json::Error),

    /// The recipe document is not valid YAML for the recipe model.
    #[error("error parsing YAML recipe document")]
    YamlParseError(#[from] serde_yaml::Error),

    /// No recipe with the requested name.
    #[error("no recipe named {0:?}")]
    RecipeNotFound(String),

    /// A recipe was requested from a document that holds none.
    #[error("recipe document has no recipes")]
    EmptyDocument,

    /// A save request carried an unusable body.
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),

    /// An error occurred when generating a report from a template.
    #[error("template error")]
    TemplateError(#[from] minijinja::Error),

    /// Reading or writing the recipe store failed.
    #[error(transparent)]
    StoreError(#[from] anyhow::Error),
}

/// Reasons a save request is rejected.
///
/// The messages are the ones returned to the client.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The request body is not JSON.
    #[error("Failed to parse incoming JSON data")]
    MalformedBody(#[source] serde_json::Error),

    /// The body has no string `recipe` field.
    #[error("Invalid recipe data received")]
    MissingRecipe,

    /// The `recipe` field is not JSON.
    #[error("Invalid JSON format in recipe data")]
    InvalidRecipeJson(#[source] serde_json::Error),

    /// The recipe document has no non-empty `recipes` array, or its first recipe is unusable.
    #[error("Parsed recipe data structure is invalid")]
    InvalidStructure,
}

impl Error {
    /// HTTP status a host should answer with when serving this error.
    ///
    /// Rejected payloads are client errors, a missing recipe is not found, everything else is
    /// an internal error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidPayload(_) => 400,
            Error::RecipeNotFound(_) => 404,
            _ => 500,
        }
    }

    /// Format the error with full context including source chain and helpful hints
    ///
    /// This method provides comprehensive error formatting that includes:
    /// - The main error message
    /// - The complete chain of error causes
    /// - Template-specific context for common errors
    ///
    /// # Example
    /// ```no_run
    /// use recipe_walkthrough::render_template;
    ///
    /// let document = r#"{ "recipes": [ { "name": "Toast" } ] }"#;
    /// let template = "{% for step in steps %}{{ step }}{% endfor"; // Missing %}
    ///
    /// match render_template(document, template) {
    ///     Ok(result) => println!("{}", result),
    ///     Err(err) => eprintln!("{}", err.format_with_source()),
    /// }
    /// ```
    #[must_use]
    pub fn format_with_source(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();

        if let Error::TemplateError(minijinja_err) = self {
            // Use minijinja's debug display which includes line numbers and source context
            let _ = write!(output, "{}", minijinja_err.display_debug_info());

            match minijinja_err.kind() {
                minijinja::ErrorKind::SyntaxError => {
                    output.push_str("\n\nHint: This is a syntax error. Check for:");
                    output.push_str("\n  • Missing closing tags ({% endfor %}, {% endif %}, etc.)");
                    output.push_str("\n  • Invalid Jinja2 syntax");
                    output.push_str("\n  • Unclosed strings or brackets");
                }
                minijinja::ErrorKind::UndefinedError => {
                    output.push_str("\n\nHint: A variable or attribute is undefined. Check that:");
                    output
                        .push_str("\n  • All variables used in the template exist in the context");
                    output.push_str("\n  • Optional step fields (timer, demo_url) are guarded");
                }
                minijinja::ErrorKind::InvalidOperation => {
                    output.push_str("\n\nHint: Invalid operation. Check that:");
                    output.push_str("\n  • Functions are called with correct arguments");
                    output.push_str("\n  • Filters are applied to compatible values");
                }
                _ => {}
            }
        } else {
            let _ = write!(output, "Error: {self:#}");
        }

        let mut current_error: &dyn std::error::Error = self;
        while let Some(source) = current_error.source() {
            let _ = write!(output, "\n\nCaused by:\n    {source:#}");
            current_error = source;
        }

        output
    }
}
