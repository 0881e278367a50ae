//! Configuration struct for walkthrough rendering.

/// Struct for template configuration.
///
/// At present, configuration contains the name of the recipe to render and the wanted serving
/// size.
///
/// Construct via [`ConfigBuilder`] or [`default()`][`Self::default`].
///
/// # Examples
///
/// Use [`Config::builder()`][`Config::builder`] to get a [`ConfigBuilder`] and then chain calls to set the desired configuration.
/// Call [`build()`][`ConfigBuilder::build`] to get a `Config`.
///
/// ```
/// use recipe_walkthrough::config::Config;
/// let config = Config::builder().recipe("Hummingbird Muffins").servings(6).build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub(crate) recipe: Option<String>,
    pub(crate) servings: Option<u32>,
}

impl Config {
    /// Return a [`ConfigBuilder`] for building a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for building a [`Config`].
///
/// By default the first recipe of the document is rendered for its own serving size.
#[derive(Default)]
pub struct ConfigBuilder {
    recipe: Option<String>,
    servings: Option<u32>,
}

impl ConfigBuilder {
    /// Set the name of the recipe to render.
    pub fn recipe<S: Into<String>>(&mut self, name: S) -> &mut Self {
        self.recipe = Some(name.into());
        self
    }

    /// Set the serving size. Ingredient amounts are scaled from the recipe's own serving size.
    pub fn servings(&mut self, servings: u32) -> &mut Self {
        self.servings = Some(servings);
        self
    }

    /// Return a new [`Config`] based on the builder's properties.
    pub fn build(&mut self) -> Config {
        Config {
            recipe: self.recipe.clone(),
            servings: self.servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.recipe, None);
        assert_eq!(config.servings, None);
    }

    #[test]
    fn builder() {
        let config = Config::builder().recipe("Pancakes").servings(3).build();
        assert_eq!(config.recipe.as_deref(), Some("Pancakes"));
        assert_eq!(config.servings, Some(3));
    }
}
