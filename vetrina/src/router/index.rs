use askama::Template;
use axum::extract::State;

use crate::{catalog::Product, AppState};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    products: Vec<Product>,
}

pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        products: state.catalog.all(),
    }
}
