use crate::api::Endpoint;
use async_trait::async_trait;
use std::fmt;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved request, ready for the wire.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub method: Method,
    pub url: String,
    /// JSON body.
    pub body: Option<String>,
    pub bearer: Option<String>,
    /// Raw bytes are expected back instead of JSON.
    pub binary: bool,
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("url", &self.url)
            .field("body", &self.body.as_ref().map(|_| "REDACTED"))
            .field("bearer", &self.bearer.as_ref().map(|_| "REDACTED"))
            .field("binary", &self.binary)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request build error: {0}")]
    Build(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Sends one request, once. Implemented over `gloo-net` in the browser.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}
