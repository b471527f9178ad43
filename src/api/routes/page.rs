//! Page Route
//!
//! - GET / - The interactive dashboard page

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
///
/// Static page; controls and charts are filled in from the layout and
/// update endpoints.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
