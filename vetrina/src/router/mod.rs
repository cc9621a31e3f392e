mod assets;
mod details;
mod index;
mod render;

use axum::{routing::get, Router};

pub use render::*;

use crate::AppState;

pub fn create() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/product/:id", get(details::get))
        .fallback(get(assets::handler))
}
