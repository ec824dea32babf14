//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use bazaar_catalog::{DEFAULT_RECOMMENDATIONS, Product};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductCard {
    pub product_id: String,
    pub name: String,
    pub about: String,
    pub discounted_price: String,
    pub actual_price: String,
    pub rating: f64,
    pub image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            about: product.about.clone(),
            discounted_price: product.discounted_price.clone(),
            actual_price: product.actual_price.clone(),
            rating: product.rating,
            image_url: product.image_url.clone(),
        }
    }
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub username: String,
    pub product: ProductCard,
    pub similar: Vec<ProductCard>,
}

/// Display the product detail page with its "similar products" panel.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(product_id): Path<String>,
) -> Result<ProductShowTemplate> {
    let product = state.catalog().get(&product_id)?;

    // Unknown ids never reach here, so an empty panel means the product's
    // text had no discriminating terms in common with the rest.
    let similar = state
        .index()
        .recommend(state.catalog(), &product_id, DEFAULT_RECOMMENDATIONS)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    Ok(ProductShowTemplate {
        username: user.username,
        product: ProductCard::from(product),
        similar,
    })
}
