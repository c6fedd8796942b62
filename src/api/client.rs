//! Charging management API client

use super::endpoints::Endpoint;
use super::error::ApiError;
use crate::config::BackendSettings;
use crate::types::{Amount, User};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, Url};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Body the backend sends when a mutation matched no row
const FAILURE_BODY: &str = "FAIL";

/// Operations the console issues against the charging backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChargingApi: Send + Sync {
    /// GET /users
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// POST /users/msisdn/{msisdn}/balance/{balance}
    async fn set_balance(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError>;

    /// PUT /users/msisdn/{msisdn}/balance/{balance}
    async fn create_user(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError>;

    /// DELETE /users/msisdn/{msisdn}
    async fn delete_user(&self, msisdn: &str) -> Result<(), ApiError>;

    /// POST /users/msisdn/{msisdn}/sanitize
    async fn sanitize(&self, msisdn: &str) -> Result<(), ApiError>;

    /// POST /users/msisdn/{msisdn}/reserved/{reserved}
    async fn set_reserved(&self, msisdn: &str, reserved: Amount) -> Result<(), ApiError>;
}

/// reqwest-backed implementation of [`ChargingApi`]
pub struct HttpChargingApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpChargingApi {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from the backend section of the configuration
    pub fn from_settings(settings: &BackendSettings) -> Self {
        Self::new(settings.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `endpoint`, each path parameter percent-encoded as one segment
    fn url(&self, endpoint: &Endpoint<'_>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Request(format!("Invalid base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Request(format!("Base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    async fn send(&self, endpoint: &Endpoint<'_>) -> Result<reqwest::Response, ApiError> {
        let url = self.url(endpoint)?;
        let start_time = Instant::now();
        debug!("{} {}", endpoint.method(), url);

        let response = self
            .http_client
            .request(endpoint.method(), url)
            .send()
            .await
            .map_err(|e| {
                warn!("{} request failed: {}", endpoint.name(), e);
                ApiError::Request(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        debug!(
            "{} answered {} in {:.2}ms",
            endpoint.name(),
            status,
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned {}: {}", endpoint.name(), status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Send a mutation and interpret the plain-text OK/FAIL body
    async fn execute(&self, endpoint: Endpoint<'_>) -> Result<(), ApiError> {
        let response = self.send(&endpoint).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to read response: {}", e)))?;

        if body.trim() == FAILURE_BODY {
            warn!("{} rejected by backend", endpoint.name());
            return Err(ApiError::Rejected(endpoint.path()));
        }

        info!("{} {} succeeded", endpoint.method(), endpoint.path());
        Ok(())
    }
}

#[async_trait]
impl ChargingApi for HttpChargingApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.send(&Endpoint::ListUsers).await?;
        let users = response
            .json::<Vec<User>>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse users: {}", e)))?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn set_balance(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError> {
        self.execute(Endpoint::SetBalance { msisdn, balance }).await
    }

    async fn create_user(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError> {
        self.execute(Endpoint::CreateUser { msisdn, balance }).await
    }

    async fn delete_user(&self, msisdn: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::DeleteUser { msisdn }).await
    }

    async fn sanitize(&self, msisdn: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::Sanitize { msisdn }).await
    }

    async fn set_reserved(&self, msisdn: &str, reserved: Amount) -> Result<(), ApiError> {
        self.execute(Endpoint::SetReserved { msisdn, reserved })
            .await
    }
}
