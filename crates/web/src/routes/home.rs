//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::routes::products::ProductCard;
use crate::state::AppState;

/// Number of top-rated products shown on the home page.
const TOP_RATED_COUNT: usize = 52;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub username: String,
    pub products: Vec<ProductCard>,
}

/// Display the home page with the top-rated products.
///
/// An empty catalog is a permanent degraded state for this process; the
/// handler surfaces it as a visible service-unavailable page rather than an
/// empty grid.
pub async fn home(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<HomeTemplate> {
    if state.catalog().is_empty() {
        return Err(AppError::CatalogUnavailable);
    }

    let products = state
        .catalog()
        .top_rated(TOP_RATED_COUNT)
        .into_iter()
        .map(ProductCard::from)
        .collect();

    Ok(HomeTemplate {
        username: user.username,
        products,
    })
}
