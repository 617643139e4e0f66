use crate::forms::SettingsForm;
use crate::routes::AppState;
use crate::views::settings::{render_settings_page, Notice};
use axum::{extract::State, response::Html, Form};
use status_page::{page::EffectRun, settings::validate_base_url};

pub async fn settings_page(State(state): State<AppState>) -> Html<String> {
    let base_url = state.page.base_url().await;
    Html(render_settings_page(base_url.as_deref(), None))
}

pub async fn settings_save(
    State(state): State<AppState>,
    Form(form): Form<SettingsForm>,
) -> Html<String> {
    let requested = Some(form.api_base_url.trim()).filter(|value| !value.is_empty());

    if let Some(value) = requested {
        if let Err(message) = validate_base_url(value) {
            return Html(render_settings_page(Some(value), Some(Notice::Rejected(&message))));
        }
    }

    let message = match state.page.set_base_url(requested).await {
        EffectRun::Unchanged => "Base URL unchanged.",
        EffectRun::MissingBaseUrl => "Base URL cleared.",
        EffectRun::Requested(_) => "Base URL saved. Health check started.",
    };

    let base_url = state.page.base_url().await;
    Html(render_settings_page(base_url.as_deref(), Some(Notice::Saved(message))))
}
