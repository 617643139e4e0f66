use serde_json::Value;

#[async_trait::async_trait]
pub trait HealthFetcher: Send + Sync {
    /// GETs `url` and decodes the body as JSON. The status code is not
    /// inspected: an error response with a JSON body still yields a value.
    async fn fetch_json(&self, url: &str) -> Result<Value, String>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HealthFetcher for ReqwestFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| format!("request failed: {err}"))?;

        let body = response
            .text()
            .await
            .map_err(|err| format!("failed to read response: {err}"))?;

        parse_health_body(&body)
    }
}

pub fn parse_health_body(body: &str) -> Result<Value, String> {
    serde_json::from_str(body).map_err(|err| format!("failed to parse response: {err}"))
}

pub fn health_url(base_url: &str) -> String {
    let base_url = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base_url}/health")
}
