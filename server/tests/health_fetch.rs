use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use status_page::{
    health::ReqwestFetcher,
    page::HealthPage,
    settings::PageConfig,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

fn spawn_backend(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().expect("missing local addr");
    let server = axum::Server::from_tcp(listener)
        .expect("server setup failed")
        .serve(app.into_make_service());
    tokio::spawn(async move {
        let _ = server.await;
    });
    format!("http://{addr}")
}

fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind failed");
    let addr = listener.local_addr().expect("missing local addr");
    drop(listener);
    format!("http://{addr}")
}

fn page_for(base: Option<String>) -> HealthPage {
    let config = PageConfig {
        api_base_url: base,
        ..PageConfig::default()
    };
    HealthPage::new(&config, Arc::new(ReqwestFetcher::new()))
}

#[tokio::test]
async fn renders_json_from_healthy_backend() {
    let base = spawn_backend(Router::new().route("/health", get(|| async { Json(json!({"status": "ok"})) })));
    let page = page_for(Some(base));

    page.mount().await.settled().await;

    let view = page.view().await;
    assert_eq!(view.error, None);
    assert_eq!(view.pretty_json.as_deref(), Some("{\n  \"status\": \"ok\"\n}"));
}

#[tokio::test]
async fn keeps_backend_key_order() {
    let base = spawn_backend(Router::new().route("/health", get(|| async { r#"{"zeta":1,"alpha":2}"# })));
    let page = page_for(Some(base));

    page.mount().await.settled().await;

    let pretty = page.view().await.pretty_json.expect("missing json");
    assert_eq!(pretty, "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}");
}

#[tokio::test]
async fn unreachable_backend_reports_request_error() {
    let page = page_for(Some(unreachable_base()));

    page.mount().await.settled().await;

    let view = page.view().await;
    let error = view.error.expect("missing error");
    assert!(error.starts_with("request failed:"), "unexpected error: {error}");
    assert!(view.pretty_json.is_none());
}

#[tokio::test]
async fn non_json_body_reports_parse_error() {
    let base = spawn_backend(Router::new().route("/health", get(|| async { "<html>ok</html>" })));
    let page = page_for(Some(base));

    page.mount().await.settled().await;

    let view = page.view().await;
    let error = view.error.expect("missing error");
    assert!(error.starts_with("failed to parse response:"), "unexpected error: {error}");
    assert!(view.data.is_none());
}

#[tokio::test]
async fn error_status_with_json_body_is_rendered() {
    let base = spawn_backend(Router::new().route(
        "/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"ok": false}))) }),
    ));
    let page = page_for(Some(base));

    page.mount().await.settled().await;

    let view = page.view().await;
    assert_eq!(view.error, None);
    assert_eq!(view.data, Some(json!({"ok": false})));
}

#[tokio::test]
async fn reconfiguring_hits_new_backend_once() {
    let first_hits = Arc::new(AtomicUsize::new(0));
    let second_hits = Arc::new(AtomicUsize::new(0));
    let first = spawn_backend(counting_backend(first_hits.clone(), json!({"backend": "first"})));
    let second = spawn_backend(counting_backend(second_hits.clone(), json!({"backend": "second"})));

    let page = page_for(Some(first));
    page.mount().await.settled().await;
    page.set_base_url(Some(&format!("{second}/"))).await.settled().await;

    assert_eq!(first_hits.load(Ordering::SeqCst), 1);
    assert_eq!(second_hits.load(Ordering::SeqCst), 1);
    assert_eq!(page.view().await.data, Some(json!({"backend": "second"})));
}

fn counting_backend(hits: Arc<AtomicUsize>, body: Value) -> Router {
    Router::new().route(
        "/health",
        get(move || {
            let hits = hits.clone();
            let body = body.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                Json(body)
            }
        }),
    )
}
