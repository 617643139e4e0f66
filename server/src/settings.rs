use std::net::{Ipv4Addr, SocketAddr};

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const BIND_VAR: &str = "STATUS_PAGE_BIND";
pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, resolved once at startup and handed to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub api_base_url: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl PageConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api_base_url: normalize_base_url(lookup(API_BASE_URL_VAR).as_deref()),
            ..Self::default()
        };

        if let Some(value) = lookup(BIND_VAR).filter(|value| !value.trim().is_empty()) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|err| format!("{BIND_VAR} is not a valid socket address ({value}): {err}"))?;
        }

        Ok(config)
    }
}

/// Blank values count as "not configured".
pub fn normalize_base_url(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checks a base URL entered at runtime. Values coming from the environment
/// are not validated; a bad one surfaces as a request error on the page.
pub fn validate_base_url(value: &str) -> Result<(), String> {
    let url = reqwest::Url::parse(value.trim())
        .map_err(|err| format!("api_base_url is not a valid URL: {err}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("api_base_url must use http or https, got {other}")),
    }
}
