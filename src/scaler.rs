//! Scaling of free-form ingredient quantities such as `1 and 1/2 cups`.
//!
//! A quantity is split into tokens by a small grammar, tried in this order at every position:
//!
//! 1. mixed number: `1 1/2`, also `1 and 1/2`
//! 2. simple fraction: `3/4`
//! 3. decimal or integer: `2`, `0.25`
//! 4. word: a run without digits, whitespace or slashes (`cups`, `(`, `tsp)`)
//! 5. whitespace run
//! 6. a lone slash
//!
//! Numeric tokens are multiplied by the ratio and re-rendered with [`format_amount`], the rest
//! is copied through untouched.
use thiserror::Error;

/// Tolerance used when snapping a value to a whole number or a recognized fraction.
pub const FRACTION_TOLERANCE: f64 = 1.0 / 10_000.0;

/// Fractions that are rendered as such instead of as a decimal.
pub const RECOGNIZED_FRACTIONS: [(f64, &str); 9] = [
    (1.0 / 2.0, "1/2"),
    (1.0 / 4.0, "1/4"),
    (3.0 / 4.0, "3/4"),
    (1.0 / 3.0, "1/3"),
    (2.0 / 3.0, "2/3"),
    (1.0 / 8.0, "1/8"),
    (3.0 / 8.0, "3/8"),
    (5.0 / 8.0, "5/8"),
    (7.0 / 8.0, "7/8"),
];

const CONNECTOR: &str = "and";

/// Reasons a quantity is left unscaled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// The ratio was negative, NaN or infinite.
    #[error("invalid scale ratio {0}")]
    InvalidRatio(f64),

    /// A numeric token did not produce a finite amount, e.g. `1/0`.
    #[error("amount {0:?} does not scale to a finite number")]
    NonFiniteAmount(String),

    /// The quantity holds no number at all, e.g. `to taste`.
    #[error("no amount found")]
    NoNumericTokens,
}

/// Kind of a lexed quantity token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Whole number plus fraction, `2 3/4` or `2 and 3/4`.
    Mixed {
        /// Whole part.
        whole: f64,
        /// Numerator of the fractional part.
        numerator: f64,
        /// Denominator of the fractional part.
        denominator: f64,
    },
    /// `num/den`.
    Fraction {
        /// Numerator.
        numerator: f64,
        /// Denominator.
        denominator: f64,
    },
    /// Integer or decimal.
    Number(f64),
    /// Run of characters that are neither digits, whitespace nor slashes.
    Word,
    /// Run of whitespace.
    Space,
    /// A slash that is not part of a fraction.
    Slash,
}

impl TokenKind {
    /// Numeric value of the token, `None` for text tokens.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match *self {
            TokenKind::Mixed {
                whole,
                numerator,
                denominator,
            } => Some(whole + numerator / denominator),
            TokenKind::Fraction {
                numerator,
                denominator,
            } => Some(numerator / denominator),
            TokenKind::Number(value) => Some(value),
            TokenKind::Word | TokenKind::Space | TokenKind::Slash => None,
        }
    }
}

/// A token together with the source text it was lexed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// What was recognized.
    pub kind: TokenKind,
    /// The exact source slice.
    pub text: &'a str,
}

/// Iterator over the tokens of a quantity string.
///
/// The tokens always cover the whole input, so concatenating their `text` gives the input back.
pub struct Tokens<'a> {
    source: &'a str,
    position: usize,
}

/// Split a quantity string into tokens.
#[must_use]
pub fn tokenize(quantity: &str) -> Tokens<'_> {
    Tokens {
        source: quantity,
        position: 0,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.position..];
        if rest.is_empty() {
            return None;
        }

        let (kind, len) = lex_mixed(rest)
            .or_else(|| lex_fraction(rest))
            .or_else(|| lex_number(rest))
            .unwrap_or_else(|| lex_text(rest));

        self.position += len;
        Some(Token {
            kind,
            text: &rest[..len],
        })
    }
}

/// Byte length of the leading ASCII digit run.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Byte length of the leading whitespace run.
fn whitespace_run(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(s.len(), |(i, _)| i)
}

fn parse_digits(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Separator between the whole part and the fraction of a mixed number.
fn mixed_separator(s: &str) -> Option<usize> {
    let leading = whitespace_run(s);
    if leading == 0 {
        return None;
    }

    // "1 and 1/2"
    if let Some(tail) = s[leading..].strip_prefix(CONNECTOR) {
        let trailing = whitespace_run(tail);
        if trailing > 0 {
            return Some(leading + CONNECTOR.len() + trailing);
        }
    }

    Some(leading)
}

fn fraction_parts(s: &str) -> Option<(f64, f64, usize)> {
    let numerator_len = digit_run(s);
    if numerator_len == 0 || s.as_bytes().get(numerator_len) != Some(&b'/') {
        return None;
    }

    let denominator_start = numerator_len + 1;
    let denominator_len = digit_run(&s[denominator_start..]);
    if denominator_len == 0 {
        return None;
    }

    let end = denominator_start + denominator_len;
    Some((
        parse_digits(&s[..numerator_len])?,
        parse_digits(&s[denominator_start..end])?,
        end,
    ))
}

fn lex_mixed(s: &str) -> Option<(TokenKind, usize)> {
    let whole_len = digit_run(s);
    if whole_len == 0 {
        return None;
    }

    let separator_len = mixed_separator(&s[whole_len..])?;
    let fraction_start = whole_len + separator_len;
    let (numerator, denominator, fraction_len) = fraction_parts(&s[fraction_start..])?;

    Some((
        TokenKind::Mixed {
            whole: parse_digits(&s[..whole_len])?,
            numerator,
            denominator,
        },
        fraction_start + fraction_len,
    ))
}

fn lex_fraction(s: &str) -> Option<(TokenKind, usize)> {
    let (numerator, denominator, len) = fraction_parts(s)?;
    Some((
        TokenKind::Fraction {
            numerator,
            denominator,
        },
        len,
    ))
}

fn lex_number(s: &str) -> Option<(TokenKind, usize)> {
    let integer_len = digit_run(s);
    if integer_len == 0 {
        return None;
    }

    let mut len = integer_len;
    if s.as_bytes().get(integer_len) == Some(&b'.') {
        let decimals = digit_run(&s[integer_len + 1..]);
        if decimals > 0 {
            len = integer_len + 1 + decimals;
        }
    }

    Some((TokenKind::Number(parse_digits(&s[..len])?), len))
}

/// Lex a non-numeric token. Never fails on non-empty input.
fn lex_text(s: &str) -> (TokenKind, usize) {
    if s.starts_with('/') {
        return (TokenKind::Slash, 1);
    }

    let space = whitespace_run(s);
    if space > 0 {
        return (TokenKind::Space, space);
    }

    let len = s
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || c.is_whitespace() || *c == '/')
        .map_or(s.len(), |(i, _)| i);
    (TokenKind::Word, len)
}

/// Round to four decimal places. Not finite for amounts too large to round.
fn round_amount(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Render an amount, preferring common cooking fractions.
///
/// ```
/// use recipe_walkthrough::scaler::format_amount;
///
/// assert_eq!(format_amount(1.5), "1 1/2");
/// assert_eq!(format_amount(0.375), "3/8");
/// assert_eq!(format_amount(3.0), "3");
/// assert_eq!(format_amount(0.3), "0.3");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    let rounded = round_amount(value);
    if rounded == 0.0 {
        return "0".to_string();
    }

    let whole = rounded.floor();
    let remainder = rounded - whole;
    if remainder.abs() < FRACTION_TOLERANCE {
        return format!("{whole:.0}");
    }

    for (fraction, label) in RECOGNIZED_FRACTIONS {
        if (remainder - fraction).abs() < FRACTION_TOLERANCE {
            return if whole > 0.0 {
                format!("{whole:.0} {label}")
            } else {
                label.to_string()
            };
        }
    }

    format!("{rounded:.1}")
}

/// Scale every amount in `quantity` by `ratio`, or say why it can't be scaled.
///
/// # Errors
///
/// Returns [`QuantityError::InvalidRatio`] for a negative or non-finite ratio,
/// [`QuantityError::NonFiniteAmount`] when an amount does not scale to a finite number and
/// [`QuantityError::NoNumericTokens`] when a non-empty quantity holds no amount.
pub fn try_scale(quantity: &str, ratio: f64) -> Result<String, QuantityError> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(QuantityError::InvalidRatio(ratio));
    }
    if quantity.is_empty() {
        return Ok(String::new());
    }

    let mut output = String::with_capacity(quantity.len());
    let mut amounts = 0;
    for token in tokenize(quantity) {
        match token.kind.value() {
            Some(value) => {
                let scaled = value * ratio;
                if !round_amount(scaled).is_finite() {
                    return Err(QuantityError::NonFiniteAmount(token.text.to_string()));
                }
                output.push_str(&format_amount(scaled));
                amounts += 1;
            }
            None => output.push_str(token.text),
        }
    }

    if amounts == 0 || output.is_empty() {
        return Err(QuantityError::NoNumericTokens);
    }
    Ok(output)
}

/// Scale every amount in `quantity` by `ratio`.
///
/// Units and other text are kept as they are. Quantities that can't be scaled are returned
/// unchanged and a warning is logged.
///
/// ```
/// use recipe_walkthrough::scaler::scale;
///
/// assert_eq!(scale("1 and 1/2 cups", 2.0), "3 cups");
/// assert_eq!(scale("to taste", 2.0), "to taste");
/// ```
#[must_use]
pub fn scale(quantity: &str, ratio: f64) -> String {
    try_scale(quantity, ratio).unwrap_or_else(|err| {
        log::warn!("leaving quantity {quantity:?} unscaled: {err}");
        quantity.to_string()
    })
}

/// Ratio between the wanted and the base serving size. A base of zero counts as one.
#[must_use]
pub fn serving_ratio(base_servings: u32, servings: u32) -> f64 {
    f64::from(servings) / f64::from(base_servings.max(1))
}
