use crate::views::layout::render_layout;
use status_page::page::PageView;

pub fn render_home_page(view: &PageView) -> String {
    let content = format!(
        r#"<h1 class="h3 mb-3">KSG Support</h1>
        <p><strong>Backend:</strong> <code id="backend-url">{backend}</code></p>
        <h2 class="h5 mt-4">Health check</h2>
        {card}"#,
        backend = html_escape::encode_text(&view.backend_label),
        card = render_health_card(view),
    );

    render_layout("KSG Support", "health", &content)
}

/// While neither a result nor an error is present the card polls itself.
pub fn render_health_card(view: &PageView) -> String {
    let poll = if view.loading {
        r#" hx-get="/partials/health-card" hx-trigger="every 1s" hx-swap="outerHTML""#
    } else {
        ""
    };
    let error = view
        .error
        .as_deref()
        .map(|value| {
            format!(
                r#"<pre class="health-error p-3">{}</pre>"#,
                html_escape::encode_text(value)
            )
        })
        .unwrap_or_default();
    let json = view
        .pretty_json
        .as_deref()
        .map(|value| {
            format!(
                r#"<pre class="health-json p-3">{}</pre>"#,
                html_escape::encode_text(value)
            )
        })
        .unwrap_or_default();
    let loading = if view.loading {
        r#"<p class="text-muted mb-0">Loading…</p>"#
    } else {
        ""
    };
    let checked_at = view
        .checked_at
        .as_deref()
        .map(|value| format!(r#"<p class="small text-muted mb-0">Checked at {value}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div id="health-card" class="card card-body"{poll}>
          {error}{json}{loading}{checked_at}
        </div>"#
    )
}
