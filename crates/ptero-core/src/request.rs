//! Shared request helper.
//!
//! Every endpoint wrapper funnels through [`PanelClient`], which owns the
//! credentials, attaches the headers the panel expects and turns non-2xx
//! responses into [`PanelError`]s. One wrapper call is one HTTP round trip.

use std::fmt;

use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{PanelError, Result};

pub use reqwest::StatusCode;

/// Media type of the Application API v1.
pub const API_MEDIA_TYPE: &str = "Application/vnd.pterodactyl.v1+json";

#[derive(Clone)]
pub struct PanelClient {
    http: reqwest::Client,
    api_root: String,
    api_key: String,
}

impl fmt::Debug for PanelClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelClient")
            .field("api_root", &self.api_root)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl PanelClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_root = config.api_root()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PanelError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_root,
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Build a client and check the key against the panel.
    pub async fn login(base_url: &str, api_key: &str) -> Result<Self> {
        let client = Self::new(ClientConfig::new(base_url, api_key))?;
        client.verify().await?;
        Ok(client)
    }

    /// Cheapest authenticated call the Application API offers: one user.
    pub async fn verify(&self) -> Result<()> {
        let query = [("per_page".to_string(), "1".to_string())];
        self.get::<serde_json::Value>("users", &query).await?;
        tracing::info!(api_root = %self.api_root, "Panel credentials verified");
        Ok(())
    }

    /// `<panel>/api/application`
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, API_MEDIA_TYPE)
    }

    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(method = %method, path, error = %e, "Panel request failed");
            PanelError::from(e)
        })?;

        let status = response.status();
        tracing::debug!(method = %method, path, status = status.as_u16(), "Panel request");
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(method = %method, path, error = %e, "Failed to read error body");
                String::new()
            }
        };
        let err = PanelError::from_response(status, &body);
        tracing::warn!(method = %method, path, status = status.as_u16(), error = %err, "Panel rejected request");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| PanelError::Decode(format!("Unexpected response from {}: {}", path, e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        let builder = self.request(Method::GET, path).query(query);
        let response = self.send(Method::GET, path, builder).await?;
        Self::decode(path, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        Self::decode(path, response).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PATCH, path).json(body);
        let response = self.send(Method::PATCH, path, builder).await?;
        Self::decode(path, response).await
    }

    /// POST without a body, for the action endpoints that answer 204.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::POST, path);
        self.send(Method::POST, path, builder).await?;
        Ok(())
    }

    /// POST a body to an endpoint that answers 204.
    pub async fn post_no_content<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let builder = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, builder).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, builder).await?;
        Ok(())
    }

    /// GET for endpoints whose body is not worth a typed model.
    pub async fn get_raw(&self, path: &str) -> Result<serde_json::Value> {
        self.get(path, &[]).await
    }
}

/// Encode a caller-supplied string for use as one path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_paths() {
        let client = PanelClient::new(ClientConfig::new("https://panel.example.com/", "ptla_key")).unwrap();
        assert_eq!(client.api_root(), "https://panel.example.com/api/application");
        assert_eq!(
            client.url("/users/3"),
            "https://panel.example.com/api/application/users/3"
        );
        assert_eq!(
            client.url("servers/5/databases"),
            "https://panel.example.com/api/application/servers/5/databases"
        );
    }

    #[test]
    fn test_new_rejects_bad_config() {
        assert!(PanelClient::new(ClientConfig::new("ftp://panel", "ptla_key")).is_err());
        assert!(PanelClient::new(ClientConfig::new("https://panel.example.com", "")).is_err());
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = PanelClient::new(ClientConfig::new("https://panel.example.com", "ptla_secret")).unwrap();
        assert!(!format!("{:?}", client).contains("ptla_secret"));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("billing-42"), "billing-42");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
