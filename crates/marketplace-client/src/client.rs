//! HTTP client for the marketplace item API

use crate::config::ClientConfig;
use crate::error::ClientError;
use log::debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

const APPLICATION_JSON: &str = "application/json";

/// Statistics endpoint generation.
///
/// The versions agree on successful bodies but not on error statuses: a
/// malformed id is a 400 under v1 and a 404 under v2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "1",
            ApiVersion::V2 => "2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.path_segment())
    }
}

/// Status and raw body of a single exchange. Interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode {
            status: self.status,
            body: self.body.clone(),
            reason: e.to_string(),
        })
    }

    pub fn json_value(&self) -> Result<serde_json::Value, ClientError> {
        self.json()
    }

    /// Fails with [`ClientError::UnexpectedStatus`] unless the status is exactly `expected`.
    pub fn require_status(self, operation: &str, expected: u16) -> Result<Self, ClientError> {
        if self.status == expected {
            Ok(self)
        } else {
            Err(ClientError::UnexpectedStatus {
                operation: operation.to_string(),
                status: self.status,
                body: self.body,
            })
        }
    }
}

#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl MarketplaceClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::transport("build http client", e))?;
        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// `POST /api/1/item`
    pub async fn create_item<T>(&self, payload: &T) -> Result<ApiResponse, ClientError>
    where
        T: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.config.endpoint("/api/1/item"))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .json(payload);
        self.execute("create item", request).await
    }

    /// `POST /api/1/item` with the body sent verbatim, for payloads that are not valid JSON.
    pub async fn create_item_raw(
        &self,
        body: impl Into<String>,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .http
            .post(self.config.endpoint("/api/1/item"))
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON)
            .body(body.into());
        self.execute("create item (raw body)", request).await
    }

    /// `GET /api/1/item/{id}`
    pub async fn get_item(&self, id: &str) -> Result<ApiResponse, ClientError> {
        let url = self
            .config
            .endpoint(&format!("/api/1/item/{}", encode_segment(id)));
        let request = self.http.get(url).header(ACCEPT, APPLICATION_JSON);
        self.execute("get item", request).await
    }

    /// `GET /api/1/{sellerID}/item`
    ///
    /// Takes any displayable value so malformed seller ids can be sent as-is.
    pub async fn get_seller_items(
        &self,
        seller_id: impl fmt::Display,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.config.endpoint(&format!(
            "/api/1/{}/item",
            encode_segment(&seller_id.to_string())
        ));
        let request = self.http.get(url).header(ACCEPT, APPLICATION_JSON);
        self.execute("get seller items", request).await
    }

    /// `GET /api/{version}/statistic/{id}`
    pub async fn get_statistic(
        &self,
        id: &str,
        version: ApiVersion,
    ) -> Result<ApiResponse, ClientError> {
        let url = self.config.endpoint(&format!(
            "/api/{}/statistic/{}",
            version.path_segment(),
            encode_segment(id)
        ));
        let request = self.http.get(url).header(ACCEPT, APPLICATION_JSON);
        self.execute(&format!("get statistic {version}"), request)
            .await
    }

    /// `DELETE /api/2/item/{id}`
    pub async fn delete_item(&self, id: &str) -> Result<ApiResponse, ClientError> {
        let url = self
            .config
            .endpoint(&format!("/api/2/item/{}", encode_segment(id)));
        let request = self.http.delete(url).header(ACCEPT, APPLICATION_JSON);
        self.execute("delete item", request).await
    }

    async fn execute(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::transport(operation, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::transport(operation, e))?;
        debug!("{operation} -> {status} ({} bytes)", body.len());
        Ok(ApiResponse { status, body })
    }
}

fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
