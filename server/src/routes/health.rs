use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse},
    Json,
};

pub async fn health(headers: HeaderMap) -> axum::response::Response {
    if wants_html(&headers) {
        Html(crate::views::health::render_health_page()).into_response()
    } else {
        Json(serde_json::json!({ "ok": true })).into_response()
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("text/html"))
        .unwrap_or(false)
}
