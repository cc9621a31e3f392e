use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::render::NotFoundTemplate;

#[derive(RustEmbed)]
#[folder = "public/"]
#[prefix = "/assets/"]
struct Assets;

/// Ninety days.
const ASSET_CACHE_CONTROL: &str = "public, max-age=7776000";

/// Fallback for everything outside the routing table: embedded assets under
/// `/assets/`, a real 404 page for the rest.
pub async fn handler(uri: Uri) -> Response {
    let path = uri.path();

    if !path.starts_with("/assets/") {
        return (StatusCode::NOT_FOUND, NotFoundTemplate).into_response();
    }

    match Assets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            (
                [
                    (header::CONTENT_TYPE, mime.as_ref()),
                    (header::CACHE_CONTROL, ASSET_CACHE_CONTROL),
                    (header::VARY, "Accept-Encoding"),
                ],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, NotFoundTemplate).into_response(),
    }
}
