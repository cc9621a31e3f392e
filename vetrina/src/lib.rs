#![forbid(unsafe_code)]

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use vetrina_views::ViewStore;

pub mod catalog;
pub mod config;
pub mod error;
pub mod router;
pub mod views;

pub use catalog::{Catalog, Product};
pub use views::{Recorder, ViewCount};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub views: ViewStore,
    pub recorder: Recorder,
}

/// The complete application: routes, static fallback and middleware.
pub fn app(state: AppState) -> Router {
    router::create()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
}
