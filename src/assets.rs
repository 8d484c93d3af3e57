//! Embedded static assets for the landing page server.
//!
//! Assets are compiled into the binary and served from a fixed map keyed by
//! the path under `/static/`. There is no runtime asset directory; a path
//! outside the map is a 404.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const STYLE_CSS: &str = include_str!("../static/css/style.css");
const APP_JS: &str = include_str!("../static/js/app.js");

/// Embedded asset map
const ASSETS: &[(&str, &str)] = &[("css/style.css", STYLE_CSS), ("js/app.js", APP_JS)];

/// Look up an embedded asset by its path under `/static/`.
pub fn lookup(path: &str) -> Option<&'static str> {
    ASSETS
        .iter()
        .find(|(name, _)| *name == path)
        .map(|(_, body)| *body)
}

/// Content type inferred from the file extension.
pub fn content_type(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Static asset handler for `/static/{*path}`.
pub async fn serve(Path(path): Path<String>) -> Response {
    match lookup(&path) {
        Some(body) => ([(header::CONTENT_TYPE, content_type(&path))], body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
