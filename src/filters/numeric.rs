use crate::scaler::{format_amount, tokenize};
use minijinja::{Error, ErrorKind::InvalidOperation};

/// Value of the first amount in a quantity, e.g. `1.5` for `1 and 1/2 cups` or `2` for
/// `about 2 cups`.
pub fn numeric_filter(value: &str) -> Result<f64, Error> {
    tokenize(value)
        .find_map(|token| token.kind.value())
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::new(InvalidOperation, "could not parse numeric"))
}

/// Render a number the way scaled amounts are rendered.
pub fn amount_filter(value: f64) -> String {
    format_amount(value)
}
