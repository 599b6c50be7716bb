//! Route page

use axum::response::Html;

/// The single page: two inputs, a calculate button, the map and status areas
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
