use crate::scaler::{scale, serving_ratio};
use minijinja::{Error, ErrorKind, State};

/// Ratio between two serving sizes, a base of zero counting as one.
///
/// # Template Usage
/// ```jinja
/// {{ serving_ratio(base_servings, 24) }}
/// ```
pub fn serving_ratio_function(base_servings: u32, servings: u32) -> f64 {
    serving_ratio(base_servings, servings)
}

/// Scale a quantity from the rendered recipe's own serving size to `servings`.
///
/// Reads `base_servings` from the template context.
///
/// # Template Usage
/// ```jinja
/// For a party of 24: {{ scale_for_servings("1/2 cup", 24) }}
/// ```
pub fn scale_for_servings(state: &State, amount: &str, servings: u32) -> Result<String, Error> {
    let base_servings = state
        .lookup("base_servings")
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidOperation,
                "base_servings not found in context",
            )
        })?;

    Ok(scale(amount, serving_ratio(base_servings, servings)))
}
