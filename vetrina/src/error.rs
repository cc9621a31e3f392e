use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::router::NotFoundTemplate;

/// Outcomes that change the HTTP response. Store trouble never lands here;
/// it is absorbed into a degraded page before this point.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("no product with id {0}")]
    ProductNotFound(u32),

    #[error("product id `{0}` is not a number")]
    InvalidProductId(String),
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        match self {
            ShopError::ProductNotFound(_) => {
                (StatusCode::NOT_FOUND, NotFoundTemplate).into_response()
            }
            ShopError::InvalidProductId(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
        }
    }
}
