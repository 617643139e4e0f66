use crate::views::layout::render_layout;

pub enum Notice<'a> {
    Saved(&'a str),
    Rejected(&'a str),
}

pub fn render_settings_page(api_base_url: Option<&str>, notice: Option<Notice<'_>>) -> String {
    let notice = notice
        .map(|notice| {
            let (class, text) = match notice {
                Notice::Saved(text) => ("text-success", text),
                Notice::Rejected(text) => ("text-danger", text),
            };
            format!("<p class=\"{class}\">{}</p>", html_escape::encode_text(text))
        })
        .unwrap_or_default();

    let content = format!(
        r#"<h1 class="h3 mb-3">Settings</h1>
        {notice}
        <form method="post" action="/settings">
          <div class="mb-3">
            <label class="form-label" for="api_base_url">Backend base URL</label>
            <input class="form-control" id="api_base_url" name="api_base_url" value="{api_base_url}" placeholder="http://localhost:8000">
            <div class="form-text text-muted">The page requests <code>&lt;base&gt;/health</code>. Leave empty to unset.</div>
          </div>
          <button class="btn btn-primary" type="submit">Save</button>
        </form>"#,
        notice = notice,
        api_base_url = html_escape::encode_double_quoted_attribute(api_base_url.unwrap_or_default()),
    );

    render_layout("Settings", "settings", &content)
}
