use crate::session::use_session;
use async_trait::async_trait;
use event_console_common::config::DEFAULT_API_URL;
use event_console_common::{
    ApiClient, ApiConfig, ApiRequest, Method, RawResponse, SessionKind, Transport, TransportError,
};
use gloo_net::http::Request;
use yew::prelude::*;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Backend location, overridable at build time with `EVENT_CONSOLE_API_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::new(option_env!("EVENT_CONSOLE_API_URL").unwrap_or(DEFAULT_API_URL))
}

/// `fetch` based transport.
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        builder = builder.header(
            "Accept",
            if request.binary {
                XLSX_MIME
            } else {
                "application/json"
            },
        );
        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| TransportError::Build(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

/// Client carrying the token of the given session.
#[hook]
pub fn use_api(kind: SessionKind) -> ApiClient {
    let client = use_context::<ApiClient>().expect("Must be nested inside an ApiClient provider");
    let session = use_session();
    client.authorized(session.sessions().get(kind))
}
