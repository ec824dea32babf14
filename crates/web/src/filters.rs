//! Custom Askama template filters.

use std::fmt::Display;

/// Format a product rating to one decimal place.
///
/// Usage in templates: `{{ product.rating|rating }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn rating(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_rating(&value.to_string()))
}

fn format_rating(raw: &str) -> String {
    raw.parse::<f64>()
        .map_or_else(|_| raw.to_string(), |r| format!("{r:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rating_rounds_to_one_decimal() {
        assert_eq!(format_rating("4"), "4.0");
        assert_eq!(format_rating("4.55"), "4.5");
    }

    #[test]
    fn test_format_rating_passes_through_non_numeric() {
        assert_eq!(format_rating("n/a"), "n/a");
    }
}
