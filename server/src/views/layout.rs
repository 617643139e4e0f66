use minijinja::{context, Environment};
use std::sync::OnceLock;
use tracing::error;

const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");

/// Wraps `content` in the page chrome. `active` picks the highlighted nav link
/// (`"health"` or `"settings"`); any other value highlights none.
pub fn render_layout(title: &str, active: &str, content: &str) -> String {
    environment()
        .get_template("base.html")
        .and_then(|template| template.render(context! { title, active, content }))
        .unwrap_or_else(|err| format!("Template error: {err}"))
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        if let Err(err) = env.add_template("base.html", BASE_TEMPLATE) {
            error!(error = %err, "base template failed to compile");
        }
        env
    })
}
