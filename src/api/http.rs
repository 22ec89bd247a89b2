use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::{
    client::GameApi,
    errors::ApiError,
    types::{Endpoint, ErrorBody, NextResponse, SaveResponse, StartResponse, StatusResponse},
};

/// `GameApi` over plain HTTP: every call is an empty `POST` to
/// `<base_url>/<endpoint>` answered with a JSON body.
pub struct HttpGameApi {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpGameApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn post<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        debug!(url = %url, "Sending request");

        let response = self
            .http_client
            .post(&url)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::message)
                .unwrap_or_else(|| body.clone());
            warn!(status = status.as_u16(), message = %message, "Request rejected by server");
            return Err(ApiError::Rejected {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            endpoint,
            message: format!("{e}. Raw response: {body}"),
        })
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn start(&self) -> Result<StartResponse, ApiError> {
        self.post(Endpoint::Start).await
    }

    async fn next(&self) -> Result<NextResponse, ApiError> {
        self.post(Endpoint::Next).await
    }

    async fn save_to_github(&self) -> Result<SaveResponse, ApiError> {
        self.post(Endpoint::SaveToGithub).await
    }

    async fn save_local(&self) -> Result<SaveResponse, ApiError> {
        self.post(Endpoint::SaveLocal).await
    }

    async fn ai_move(&self) -> Result<StatusResponse, ApiError> {
        self.post(Endpoint::AiMove).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let api = HttpGameApi::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url(Endpoint::Start), "http://localhost:8000/start");
        assert_eq!(
            api.url(Endpoint::SaveToGithub),
            "http://localhost:8000/save_to_github"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is closed on test machines
        let api = HttpGameApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = api.start().await;
        assert!(matches!(
            result,
            Err(ApiError::Transport {
                endpoint: Endpoint::Start,
                ..
            })
        ));
    }
}
