use crate::forms::ConfigPayload;
use crate::routes::AppState;
use axum::{extract::State, http::StatusCode, Json};
use status_page::{page::PageView, settings::validate_base_url};

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigPayload> {
    Json(ConfigPayload {
        api_base_url: state.page.base_url().await,
    })
}

pub async fn set_config(
    State(state): State<AppState>,
    Json(payload): Json<ConfigPayload>,
) -> Result<Json<PageView>, (StatusCode, String)> {
    let requested = payload
        .api_base_url
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    if let Some(value) = requested {
        validate_base_url(value).map_err(|message| (StatusCode::BAD_REQUEST, message))?;
    }

    state.page.set_base_url(requested).await;
    Ok(Json(state.page.view().await))
}
