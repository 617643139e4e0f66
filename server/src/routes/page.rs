use crate::routes::AppState;
use crate::views::page::{render_health_card, render_home_page};
use axum::{extract::State, response::Html, Json};
use status_page::page::PageView;

pub async fn home_page(State(state): State<AppState>) -> Html<String> {
    Html(render_home_page(&state.page.view().await))
}

pub async fn health_card_partial(State(state): State<AppState>) -> Html<String> {
    Html(render_health_card(&state.page.view().await))
}

pub async fn page_api(State(state): State<AppState>) -> Json<PageView> {
    Json(state.page.view().await)
}
