use crate::api::{ApiClient, Endpoint};
use crate::config::ApiConfig;
use crate::session::{Session, SessionKind, Token};
use crate::storage::{StorageError, TokenStorage};
use crate::transport::{ApiRequest, RawResponse, Transport, TransportError};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Canned answers per endpoint, recording everything sent.
#[derive(Clone, Default)]
pub struct MockTransport {
    replies: Rc<RefCell<HashMap<Endpoint, Result<RawResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, endpoint: Endpoint, response: RawResponse) {
        self.replies.borrow_mut().insert(endpoint, Ok(response));
    }

    pub fn reply_json(&self, endpoint: Endpoint, status: u16, body: serde_json::Value) {
        self.reply(endpoint, RawResponse::new(status, body.to_string()));
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.replies.borrow_mut().insert(
            endpoint,
            Err(TransportError::Network("connection refused".into())),
        );
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::default(), Rc::new(self.clone()))
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let endpoint = request.endpoint;
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow()
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Network(format!("no reply for {endpoint}"))))
    }
}

pub fn authorized_client(mock: &MockTransport, token: &str) -> ApiClient {
    let session = Session::authenticated(SessionKind::Admin, Token::parse(token).unwrap());
    mock.client().authorized(&session)
}

/// Storage whose writes always fail, like a full or locked-down `localStorage`.
#[derive(Debug, Clone, Copy)]
pub struct ReadOnlyStorage;

impl TokenStorage for ReadOnlyStorage {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) {}
}
