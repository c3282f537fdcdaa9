//! NYC 311 service-request API client
//!
//! Provides async methods for the create and lookup endpoints. Each call is a
//! single request; there is no retry, rate limiting, or caching at this layer.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use super::endpoints::{paths, ServiceRequestQuery, SUBSCRIPTION_KEY_HEADER};
use super::error_decoder;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::*;

/// NYC 311 API client
#[derive(Clone)]
pub struct Nyc311Client {
    /// HTTP client, preconfigured with the subscription key header
    http: reqwest::Client,
    /// Gateway origin (e.g., "https://api.nyc.gov")
    base_url: String,
}

impl Nyc311Client {
    /// Create a new client
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut key = HeaderValue::from_str(config.subscription_key.expose()).map_err(|_| {
            ApiError::InvalidRequest("Subscription key is not a valid header value".into())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(SUBSCRIPTION_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a new HPD complaint.
    ///
    /// Not idempotent: calling twice with the same payload files two requests.
    pub async fn create_service_request(
        &self,
        payload: &ServiceRequestPayload,
    ) -> ApiResult<ServiceRequestCreationResult> {
        for warning in payload.warnings() {
            tracing::warn!("{}", warning);
        }

        let body = serde_json::to_vec(payload)?;
        let request = self
            .http
            .post(self.url(paths::CREATE_SERVICE_REQUEST))
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let result: ServiceRequestCreationResult =
            self.send(request, paths::CREATE_SERVICE_REQUEST).await?;
        tracing::info!("Created service request {}", result.sr_number);
        Ok(result)
    }

    /// Look up a service request by its SR number
    pub async fn get_service_request(&self, sr_number: &str) -> ApiResult<ServiceRequestRecord> {
        let sr_number = sr_number.trim();
        if sr_number.is_empty() {
            return Err(ApiError::InvalidRequest("SR number must not be empty".into()));
        }

        let request = self
            .http
            .get(self.url(paths::GET_SERVICE_REQUEST))
            .query(&ServiceRequestQuery { sr_number });

        self.send(request, paths::GET_SERVICE_REQUEST).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode a 200 body as `T`; every other status goes
    /// through the error decoder.
    async fn send<T>(&self, request: reqwest::RequestBuilder, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} -> {}", path, status);

        if status != reqwest::StatusCode::OK {
            return Err(error_decoder::decode_response(response).await);
        }

        let body_text = response.text().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to read response body: {}", e))
        })?;

        serde_json::from_str(&body_text).map_err(|e| {
            tracing::error!(
                "JSON parse error for {}: {}. Body: {}",
                path,
                e,
                error_decoder::preview(&body_text)
            );
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })
    }
}

impl std::fmt::Debug for Nyc311Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nyc311Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
