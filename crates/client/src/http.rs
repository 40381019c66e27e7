//! Thin reqwest wrapper over the backend's JSON API.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use rawda_shared::config::ApiConfig;
use rawda_shared::{BackendError, BackendResult, Period};

/// HTTP client for the backend collaborator.
///
/// Attaches the bearer token to every call and maps HTTP failures onto
/// the shared error taxonomy. Cloning is cheap; the underlying pool is
/// shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client from configuration.
    pub fn new(config: &ApiConfig) -> BackendResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Replaces the bearer token after (re-)authentication.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Sends the request and checks the status; error statuses are mapped
    /// via [`BackendError::from_status`] (401 is session expiry, 400/409
    /// are conflicts, the rest keep their code).
    async fn check(&self, builder: RequestBuilder, path: &str) -> BackendResult<Response> {
        let response = builder.send().await.map_err(|e| {
            warn!(path, error = %e, "backend unreachable");
            BackendError::Network(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(path, status = status.as_u16(), "backend call ok");
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            let err = BackendError::from_status(status.as_u16(), message);
            warn!(
                path,
                status = status.as_u16(),
                code = err.error_code(),
                "backend call failed"
            );
            Err(err)
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    /// GET returning JSON.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BackendResult<T> {
        let response = self.check(self.request(Method::GET, path), path).await?;
        Self::decode(response).await
    }

    /// GET with `month`/`year` query parameters.
    pub async fn get_period<T: DeserializeOwned>(
        &self,
        path: &str,
        period: Period,
    ) -> BackendResult<T> {
        let builder = self
            .request(Method::GET, path)
            .query(&[("month", i64::from(period.month)), ("year", i64::from(period.year))]);
        let response = self.check(builder, path).await?;
        Self::decode(response).await
    }

    /// POST with a JSON body, returning JSON.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).json(body);
        let response = self.check(builder, path).await?;
        Self::decode(response).await
    }

    /// PUT with a JSON body, returning JSON.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).json(body);
        let response = self.check(builder, path).await?;
        Self::decode(response).await
    }

    /// DELETE; any response body is ignored.
    pub async fn delete(&self, path: &str) -> BackendResult<()> {
        self.check(self.request(Method::DELETE, path), path).await?;
        Ok(())
    }
}
