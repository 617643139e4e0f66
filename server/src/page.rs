use crate::{
    health::{health_url, HealthFetcher},
    settings::{normalize_base_url, PageConfig, API_BASE_URL_VAR},
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, info, warn};

pub const MISSING_BASE_URL_MESSAGE: &str =
    "Missing API_BASE_URL. Check your environment and restart the server.";
pub const NOT_SET_LABEL: &str = "(not set)";

/// The health display page. Clones share one state; the fetch effect runs on
/// mount and again whenever the base URL changes.
#[derive(Clone)]
pub struct HealthPage {
    inner: Arc<Mutex<PageInner>>,
    fetcher: Arc<dyn HealthFetcher>,
}

#[derive(Default)]
struct PageInner {
    base_url: Option<String>,
    data: Option<Value>,
    err: String,
    checked_at: Option<String>,
}

/// What a call to [`HealthPage::mount`] or [`HealthPage::set_base_url`] did.
#[derive(Debug)]
pub enum EffectRun {
    /// The base URL did not change, so the effect was not re-run.
    Unchanged,
    /// No base URL is configured; the configuration error was recorded.
    MissingBaseUrl,
    /// A health request is in flight on the given task.
    Requested(JoinHandle<()>),
}

impl EffectRun {
    /// Waits for the in-flight request, if any, to store its result.
    pub async fn settled(self) {
        if let EffectRun::Requested(handle) = self {
            if let Err(err) = handle.await {
                warn!(error = %err, "health request task did not finish");
            }
        }
    }

    pub fn requested(&self) -> bool {
        matches!(self, EffectRun::Requested(_))
    }
}

/// Render-ready snapshot of the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub base_url: Option<String>,
    pub backend_label: String,
    pub error: Option<String>,
    pub data: Option<Value>,
    pub pretty_json: Option<String>,
    pub loading: bool,
    pub checked_at: Option<String>,
}

impl HealthPage {
    pub fn new(config: &PageConfig, fetcher: Arc<dyn HealthFetcher>) -> Self {
        let inner = PageInner {
            base_url: normalize_base_url(config.api_base_url.as_deref()),
            ..PageInner::default()
        };
        Self {
            inner: Arc::new(Mutex::new(inner)),
            fetcher,
        }
    }

    pub async fn base_url(&self) -> Option<String> {
        self.inner.lock().await.base_url.clone()
    }

    pub async fn mount(&self) -> EffectRun {
        let base_url = self.base_url().await;
        info!(
            base_url = base_url.as_deref().unwrap_or(NOT_SET_LABEL),
            "mounting health page"
        );
        self.run_effect(base_url).await
    }

    pub async fn set_base_url(&self, value: Option<&str>) -> EffectRun {
        let next = normalize_base_url(value);
        {
            let mut inner = self.inner.lock().await;
            if inner.base_url == next {
                return EffectRun::Unchanged;
            }
            info!(
                from = inner.base_url.as_deref().unwrap_or(NOT_SET_LABEL),
                to = next.as_deref().unwrap_or(NOT_SET_LABEL),
                "base url changed"
            );
            *inner = PageInner {
                base_url: next.clone(),
                ..PageInner::default()
            };
        }
        self.run_effect(next).await
    }

    pub async fn view(&self) -> PageView {
        let inner = self.inner.lock().await;
        let error = Some(inner.err.clone()).filter(|err| !err.is_empty());
        let pretty_json = inner
            .data
            .as_ref()
            .and_then(|value| serde_json::to_string_pretty(value).ok());
        let loading = error.is_none() && inner.data.is_none();

        PageView {
            base_url: inner.base_url.clone(),
            backend_label: inner
                .base_url
                .clone()
                .unwrap_or_else(|| NOT_SET_LABEL.to_string()),
            error,
            data: inner.data.clone(),
            pretty_json,
            loading,
            checked_at: inner.checked_at.clone(),
        }
    }

    async fn run_effect(&self, base_url: Option<String>) -> EffectRun {
        let Some(base_url) = base_url else {
            warn!("{API_BASE_URL_VAR} is not set; skipping health request");
            self.inner.lock().await.err = MISSING_BASE_URL_MESSAGE.to_string();
            return EffectRun::MissingBaseUrl;
        };

        let url = health_url(&base_url);
        let fetcher = self.fetcher.clone();
        let inner = self.inner.clone();
        debug!(%url, "requesting backend health");

        // Results of overlapping requests are stored in resolution order.
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch_json(&url).await;
            let mut inner = inner.lock().await;
            match result {
                Ok(value) => inner.data = Some(value),
                Err(err) => {
                    warn!(%url, error = %err, "health request failed");
                    inner.err = err;
                }
            }
            inner.checked_at = current_datetime();
        });
        EffectRun::Requested(handle)
    }
}

fn current_datetime() -> Option<String> {
    let format =
        time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]").ok()?;
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).ok()
}
