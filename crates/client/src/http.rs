//! Thin JSON layer over `reqwest`.
//!
//! Every call resolves to `Result<T, AppError>`: transport failures are
//! `Network`, non-2xx statuses go through [`AppError::from_status`] and
//! unparseable bodies are `Decode`. Nothing is retried.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, RecordId};

/// Query string pairs, in order. Repeated keys are sent repeatedly.
pub type QueryPairs = Vec<(&'static str, String)>;

/// `<collection>/<id>` with the id percent-encoded, so an id can never
/// add path segments or a query string.
pub fn record_path(collection: &str, id: &RecordId) -> String {
    format!("{collection}/{}", urlencoding::encode(id.as_str()))
}

/// HTTP client bound to one base URL, optionally carrying a bearer token.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Same client and base URL, sending `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    /// Same connection pool, different base URL, no token.
    pub fn rebase(&self, base_url: impl Into<String>) -> Self {
        Self::with_http(self.http.clone(), base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryPairs,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let body = self
            .execute(Method::GET, &url, self.http.get(&url).query(query))
            .await?;
        decode(&body)
    }

    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let body = self
            .execute(Method::POST, &url, self.http.post(&url).json(payload))
            .await?;
        decode(&body)
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let body = self
            .execute(Method::PUT, &url, self.http.put(&url).json(payload))
            .await?;
        decode(&body)
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let body = self
            .execute(Method::PATCH, &url, self.http.patch(&url).json(payload))
            .await?;
        decode(&body)
    }

    /// PATCH without a body whose response content is ignored.
    pub async fn patch_empty(&self, path: &str) -> Result<(), AppError> {
        let url = self.url(path);
        self.execute(Method::PATCH, &url, self.http.patch(&url))
            .await
            .map(|_| ())
    }

    /// DELETE; the response body (JSON-server answers `{}`) is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let url = self.url(path);
        self.execute(Method::DELETE, &url, self.http.delete(&url))
            .await
            .map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        builder: RequestBuilder,
    ) -> Result<String, AppError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        tracing::debug!(%method, url, "api request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, url, error = %e, "api request failed to send");
            AppError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !status.is_success() {
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::debug!(%method, url, status = status.as_u16(), kind = %err.kind, "api error response");
            return Err(err);
        }

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::decode(e.to_string()))
}
