use std::time::Duration;

use reqwest::{header, Client};
use url::Url;

use crate::error::FetchError;
use crate::page::PageSignals;

pub const DEFAULT_USER_AGENT: &str = "keyphrase-bot/0.1 (+https://example.com/bot)";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_body_bytes: usize,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 12,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_body_bytes: 2 * 1024 * 1024,
            max_redirects: 5,
        }
    }
}

/// Validate a user-supplied page address. Only http and https are fetched.
pub fn parse_target(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim())
        .map_err(|source| FetchError::InvalidUrl { url: raw.to_string(), source })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    config: FetchConfig,
}

impl PageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// GET the page and return its body as text. Any non-success status is an error.
    pub async fn fetch_html(&self, raw_url: &str) -> Result<String, FetchError> {
        let url = parse_target(raw_url)?;
        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "page fetch rejected");
            return Err(FetchError::Status { url: url.to_string(), status: status.as_u16() });
        }
        let limit = self.config.max_body_bytes;
        if resp.content_length().is_some_and(|len| len as usize > limit) {
            return Err(FetchError::BodyTooLarge { limit });
        }
        if let Some(ct) = resp.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) {
            if !ct.starts_with("text/html") {
                tracing::warn!(%url, content_type = ct, "parsing non-html response as html");
            }
        }
        let bytes = resp.bytes().await?;
        if bytes.len() > limit {
            return Err(FetchError::BodyTooLarge { limit });
        }
        tracing::info!(%url, bytes = bytes.len(), "page fetched");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Fetch and extract signals. The trimmed input, not the normalized `Url`, feeds the URL-derived text.
    pub async fn fetch(&self, raw_url: &str) -> Result<PageSignals, FetchError> {
        let target = raw_url.trim();
        let html = self.fetch_html(target).await?;
        Ok(PageSignals::from_html(target, &html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_targets() {
        assert!(matches!(parse_target("ftp://example.com/x"), Err(FetchError::UnsupportedScheme(s)) if s == "ftp"));
        assert!(matches!(parse_target("not a url"), Err(FetchError::InvalidUrl { .. })));
        assert!(parse_target(" https://example.com/a-b ").is_ok());
    }
}
