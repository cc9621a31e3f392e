use askama::Template;
use axum::extract::{Path, State};
use tracing::warn;

use crate::{catalog::Product, error::ShopError, views::ViewCount, AppState};

#[derive(Template)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    product: Product,
    views: ViewCount,
}

/// The enrichment flow: resolve the product, read its historic view count,
/// bind the page, then queue the new view. A failing store degrades the
/// count but never takes the page down.
pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<ProductTemplate, ShopError> {
    let id = raw_id.parse().map_err(|_| {
        warn!("rejected non-numeric product id `{raw_id}`");
        ShopError::InvalidProductId(raw_id.clone())
    })?;

    let product = state
        .catalog
        .get(id)
        .ok_or(ShopError::ProductNotFound(id))?;

    let views = match state.views.count(product.id).await {
        Ok(count) => ViewCount::Counted(count),
        Err(err) => {
            warn!(product_id = product.id, "view count unavailable: {err}");
            ViewCount::Unavailable
        }
    };

    let page = ProductTemplate { product, views };

    // Queued only once the page is fully bound: the response never waits on
    // the store, and every event maps to a resolved product.
    state.recorder.record(&page.product);

    Ok(page)
}
