//! Product record and the raw CSV row it is validated from.

use serde::Deserialize;

/// A validated catalog product.
///
/// Every field marked required in the source contract is guaranteed present
/// and `rating` is guaranteed to be a finite number. Prices are kept as the
/// currency-formatted strings the source carries; only their presence is
/// validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Source identifier. Unique in intent, but the source is not
    /// deduplicated; lookups resolve to the first match in load order.
    pub product_id: String,
    /// Display name.
    pub name: String,
    /// Free-text description. Empty when the source column is absent.
    pub about: String,
    /// Discounted price as formatted in the source.
    pub discounted_price: String,
    /// Original price as formatted in the source.
    pub actual_price: String,
    /// Average rating, coerced to a number at load time.
    pub rating: f64,
    /// Product image URL.
    pub image_url: String,
}

impl Product {
    /// The text document this product contributes to the similarity index:
    /// name and description joined by a single space.
    #[must_use]
    pub fn document(&self) -> String {
        format!("{} {}", self.name, self.about)
    }
}

/// One raw row of the catalog source, before validation.
///
/// All columns are optional here; [`RawRecord::validate`] applies the
/// required-field and rating-coercion rules.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub about_product: Option<String>,
    pub discounted_price: Option<String>,
    pub actual_price: Option<String>,
    pub rating: Option<String>,
    pub img_link: Option<String>,
}

impl RawRecord {
    /// Validate a raw row into a [`Product`].
    ///
    /// Returns `None` when any required column is missing or empty, or when
    /// `rating` cannot be coerced to a finite number. `about_product` is the
    /// only optional column and defaults to the empty string.
    pub(crate) fn validate(self) -> Option<Product> {
        let product_id = required(self.product_id)?;
        let name = required(self.product_name)?;
        let discounted_price = required(self.discounted_price)?;
        let actual_price = required(self.actual_price)?;
        let image_url = required(self.img_link)?;

        let rating = required(self.rating)?.trim().parse::<f64>().ok()?;
        if !rating.is_finite() {
            return None;
        }

        Some(Product {
            product_id,
            name,
            about: self.about_product.unwrap_or_default(),
            discounted_price,
            actual_price,
            rating,
            image_url,
        })
    }
}

/// Treat absent and empty-string column values alike as missing.
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
