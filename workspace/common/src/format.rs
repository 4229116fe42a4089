//! Display formatting for monetary figures.
//!
//! `NumberFormat` is an explicit value handed to whatever renders numbers; it
//! never touches process-wide locale state, so the same inputs always produce
//! the same text regardless of the host environment.

use serde::{Deserialize, Serialize};

/// Separator scheme and precision used to render reals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Digits after the decimal separator
    pub decimal_places: usize,
    /// Inserted between groups of three integer digits
    pub thousands_separator: String,
    /// Separates the integer and fractional parts
    pub decimal_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::fallback()
    }
}

impl NumberFormat {
    pub fn new(decimal_places: usize, thousands_separator: &str, decimal_separator: &str) -> Self {
        Self {
            decimal_places,
            thousands_separator: thousands_separator.to_string(),
            decimal_separator: decimal_separator.to_string(),
        }
    }

    /// Fixed scheme used when no locale is configured or the locale is unknown:
    /// "." groups thousands and "," separates decimals, two decimal places.
    pub fn fallback() -> Self {
        Self::new(2, ".", ",")
    }

    /// Looks up the separator scheme for a locale name such as `de_DE`,
    /// `en-US`, `fr_FR.UTF-8` or `German`. Returns `None` for unknown locales.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let normalized = locale
            .split('.')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
            .replace('-', "_");
        let (language, region) = match normalized.split_once('_') {
            Some((language, region)) => (language, Some(region)),
            None => (normalized.as_str(), None),
        };

        let format = match (language, region) {
            ("de" | "fr" | "it", Some("ch")) => Self::new(2, "'", "."),
            ("de" | "german" | "it" | "es" | "nl" | "pt" | "da", _) => Self::new(2, ".", ","),
            ("en" | "english", _) => Self::new(2, ",", "."),
            ("fr" | "french", _) => Self::new(2, " ", ","),
            _ => return None,
        };
        Some(format)
    }

    /// Resolves an optional locale name, falling back to `NumberFormat::fallback`.
    pub fn for_locale_or_fallback(locale: Option<&str>) -> Self {
        locale.and_then(Self::for_locale).unwrap_or_else(Self::fallback)
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Renders `value` with the configured precision and separators.
    pub fn format(&self, value: f64) -> String {
        self.format_with(value, self.decimal_places)
    }

    /// Renders `value` with an explicit number of decimal places.
    pub fn format_with(&self, value: f64, decimal_places: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let rendered = format!("{:.*}", decimal_places, value.abs());
        let (integer_part, fraction_part) = match rendered.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (rendered.as_str(), None),
        };

        // Values that round to zero are printed without a sign
        let negative = value < 0.0 && rendered.bytes().any(|b| b.is_ascii_digit() && b != b'0');

        let mut out = String::with_capacity(rendered.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(integer_part, &self.thousands_separator));
        if let Some(fraction) = fraction_part {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 * separator.len());

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    result
}
