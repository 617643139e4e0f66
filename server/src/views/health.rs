use crate::views::layout::render_layout;

pub fn render_health_page() -> String {
    render_layout(
        "Status Page Health",
        "",
        r#"<div class="card card-body">
          <h1 class="h4 mb-2">Status page</h1>
          <p class="text-muted mb-0">Status: ok</p>
        </div>"#,
    )
}
