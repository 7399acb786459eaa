use crate::config::ApiConfig;
use crate::export::{Export, ExportTarget};
use crate::search::SearchKind;
use crate::session::{Session, SessionError, Token};
use crate::transport::{ApiRequest, Method, RawResponse, Transport, TransportError};
use event_console_dto::envelope::{ApiResponse, ErrorBody};
use event_console_dto::records::{
    AmountTotal, Counts, LatestStaff, LatestUsers, MobileSearch, Person, Registrant, StaffList,
    UserList, UserTotal,
};
use event_console_dto::session::{AdminLoginPayload, AttendanceLoginResponse, Credentials};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fmt;
use std::rc::Rc;
use strum::{Display, EnumIter};

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Not signed in")]
    Unauthenticated,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Login refused")]
    Rejected(Option<String>),
    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Message the backend attached to the failure, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}

/// Every backend route the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Endpoint {
    AdminLogin,
    AttendanceLogin,
    Counts,
    TotalAmount,
    UserCount,
    LatestUsers,
    LatestStaff,
    SearchUser,
    SearchStaff,
    Users,
    Staff,
    ExportUsers,
    ExportEvent,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AdminLogin => "/admin-login",
            Endpoint::AttendanceLogin => "/attendanceLogin",
            Endpoint::Counts => "/count",
            Endpoint::TotalAmount => "/amount",
            Endpoint::UserCount => "/user-count",
            Endpoint::LatestUsers => "/latestUsers",
            Endpoint::LatestStaff => "/latestStaff",
            Endpoint::SearchUser => "/searchByMobileUser",
            Endpoint::SearchStaff => "/searchByMobileStaff",
            Endpoint::Users => "/users",
            Endpoint::Staff => "/staff",
            Endpoint::ExportUsers => "/export/users/excel",
            Endpoint::ExportEvent => "/exportEventToExcel",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::AdminLogin | Endpoint::AttendanceLogin => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::AdminLogin | Endpoint::AttendanceLogin)
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Endpoint::ExportUsers | Endpoint::ExportEvent)
    }
}

/// Backend client. Cheap to clone; the bearer token comes from the session it was
/// authorized with.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
    bearer: Option<Token>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("authorized", &self.bearer.is_some())
            .finish()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.transport, &other.transport)
            && self.bearer == other.bearer
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Rc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            bearer: None,
        }
    }

    /// Copy of this client carrying the session's token on every protected call.
    pub fn authorized(&self, session: &Session) -> Self {
        Self {
            bearer: session.token().cloned(),
            ..self.clone()
        }
    }

    fn request(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<ApiRequest, ApiError> {
        let bearer = if endpoint.requires_auth() {
            let token = self.bearer.as_ref().ok_or(ApiError::Unauthenticated)?;
            Some(token.as_str().to_string())
        } else {
            None
        };
        let mut url = self.config.url(endpoint.path());
        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        Ok(ApiRequest {
            endpoint,
            method: endpoint.method(),
            url,
            body,
            bearer,
            binary: endpoint.is_binary(),
        })
    }

    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        debug!("{} {}", request.method, request.url);
        let endpoint = request.endpoint;
        let response = self.transport.send(request).await.map_err(|e| {
            warn!("{} failed: {}", endpoint, e);
            e
        })?;
        debug!("{} answered {}", endpoint, response.status);
        Ok(response)
    }

    /// Sends and rejects non-2xx answers, keeping the backend's message when it gave one.
    async fn fetch(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let response = self.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }
        let message = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message().map(str::to_string));
        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }

    async fn get_payload<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self.fetch(self.request(endpoint, query, None)?).await?;
        let envelope: ApiResponse<T> = serde_json::from_slice(&response.body)?;
        Ok(envelope.payload)
    }

    pub async fn admin_login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let body = serde_json::to_string(credentials)?;
        let request = self.request(Endpoint::AdminLogin, &[], Some(body))?;
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::InvalidCredentials);
        }
        let envelope: ApiResponse<AdminLoginPayload> = serde_json::from_slice(&response.body)?;
        Ok(Token::parse(envelope.payload.user.token)?)
    }

    /// The attendance backend reports refusals in the envelope, not the HTTP status.
    pub async fn attendance_login(&self, credentials: &Credentials) -> Result<Token, ApiError> {
        let body = serde_json::to_string(credentials)?;
        let request = self.request(Endpoint::AttendanceLogin, &[], Some(body))?;
        let response = self.send(request).await?;
        let envelope: AttendanceLoginResponse = serde_json::from_slice(&response.body)?;
        if envelope.status_code != 200 {
            return Err(ApiError::Rejected(
                envelope.message.filter(|m| !m.trim().is_empty()),
            ));
        }
        Ok(Token::try_from(envelope.payload.and_then(|p| p.token))?)
    }

    pub async fn counts(&self) -> Result<Counts, ApiError> {
        self.get_payload(Endpoint::Counts, &[]).await
    }

    pub async fn total_amount(&self) -> Result<f64, ApiError> {
        let total: AmountTotal = self.get_payload(Endpoint::TotalAmount, &[]).await?;
        Ok(total.total_amount)
    }

    pub async fn total_participants(&self) -> Result<u64, ApiError> {
        let total: UserTotal = self.get_payload(Endpoint::UserCount, &[]).await?;
        Ok(total.total_user_count)
    }

    pub async fn latest_users(&self) -> Result<Vec<Person>, ApiError> {
        let latest: LatestUsers = self.get_payload(Endpoint::LatestUsers, &[]).await?;
        Ok(latest.users)
    }

    pub async fn latest_staff(&self) -> Result<Vec<Person>, ApiError> {
        let latest: LatestStaff = self.get_payload(Endpoint::LatestStaff, &[]).await?;
        Ok(latest.staff)
    }

    /// No match is an empty list, not an error.
    pub async fn search_by_mobile(
        &self,
        kind: SearchKind,
        mobile: &str,
    ) -> Result<Vec<Person>, ApiError> {
        let found: MobileSearch = self
            .get_payload(kind.endpoint(), &[("mobile", mobile)])
            .await?;
        Ok(found.into_results())
    }

    pub async fn participants(&self) -> Result<Vec<Registrant>, ApiError> {
        let list: UserList = self.get_payload(Endpoint::Users, &[]).await?;
        Ok(list.users)
    }

    pub async fn staff(&self) -> Result<Vec<Registrant>, ApiError> {
        let list: StaffList = self.get_payload(Endpoint::Staff, &[]).await?;
        Ok(list.staff)
    }

    pub async fn export(&self, target: &ExportTarget) -> Result<Export, ApiError> {
        let request = match target {
            ExportTarget::AllUsers => self.request(Endpoint::ExportUsers, &[], None)?,
            ExportTarget::Event(name) => {
                self.request(Endpoint::ExportEvent, &[("eventName", name)], None)?
            }
        };
        let response = self.fetch(request).await?;
        Ok(Export {
            filename: target.filename(),
            bytes: response.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionKind;
    use crate::testing::{authorized_client, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn protected_calls_carry_bearer() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::TotalAmount, 200, json!({"statusCode": 200, "payload": {"totalAmount": 1250.5}}));
        let client = authorized_client(&mock, "tok123");
        assert_eq!(block_on(client.total_amount()).unwrap(), 1250.5);
        let sent = mock.requests();
        assert_eq!(sent[0].bearer.as_deref(), Some("tok123"));
        assert_eq!(sent[0].url, "http://localhost:6789/api/v1/amount");
        assert_eq!(sent[0].method, Method::Get);
    }

    #[test]
    fn protected_call_without_session_never_reaches_transport() {
        let mock = MockTransport::new();
        let client = mock.client().authorized(&Session::anonymous(SessionKind::Admin));
        assert!(matches!(block_on(client.counts()), Err(ApiError::Unauthenticated)));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn admin_login_returns_token_without_bearer() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AdminLogin, 200, json!({"statusCode": 200, "payload": {"User": {"token": "abc"}}}));
        let token = block_on(mock.client().admin_login(&Credentials::new("c1", "pw"))).unwrap();
        assert_eq!(token.as_str(), "abc");
        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].bearer, None);
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_ref().unwrap()).unwrap();
        assert_eq!(body, json!({"username": "c1", "password": "pw"}));
    }

    #[test]
    fn admin_login_non_2xx_is_invalid_credentials() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AdminLogin, 401, json!({"statusCode": 401, "message": "nope"}));
        let result = block_on(mock.client().admin_login(&Credentials::new("c1", "bad")));
        assert!(matches!(result, Err(ApiError::InvalidCredentials)));
    }

    #[test]
    fn admin_login_with_empty_token_is_rejected() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AdminLogin, 200, json!({"statusCode": 200, "payload": {"User": {"token": ""}}}));
        let result = block_on(mock.client().admin_login(&Credentials::new("c1", "pw")));
        assert!(matches!(result, Err(ApiError::Session(SessionError::EmptyToken))));
    }

    #[test]
    fn attendance_refusal_keeps_backend_message() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AttendanceLogin, 200, json!({"statusCode": 401, "message": "Bad user"}));
        let err = block_on(mock.client().attendance_login(&Credentials::new("d", "x"))).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));
        assert_eq!(err.backend_message(), Some("Bad user"));
    }

    #[test]
    fn attendance_login_token() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AttendanceLogin, 200, json!({"statusCode": 200, "payload": {"token": "desk"}}));
        let token = block_on(mock.client().attendance_login(&Credentials::new("d", "x"))).unwrap();
        assert_eq!(token.as_str(), "desk");
    }

    #[test]
    fn search_query_is_encoded() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::SearchStaff, 200, json!({"statusCode": 200, "payload": {}}));
        let client = authorized_client(&mock, "t");
        let found = block_on(client.search_by_mobile(SearchKind::Staff, "+91 98765")).unwrap();
        assert!(found.is_empty());
        assert_eq!(
            mock.requests()[0].url,
            "http://localhost:6789/api/v1/searchByMobileStaff?mobile=%2B91%2098765"
        );
    }

    #[test]
    fn staff_list_reads_capitalised_key() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::Staff, 200, json!({"statusCode": 200, "payload": {"Staff": [{"firstName": "Meera", "Token": "S-1"}]}}));
        let staff = block_on(authorized_client(&mock, "t").staff()).unwrap();
        assert_eq!(staff[0].first_name, "Meera");
        assert_eq!(staff[0].token, "S-1");
    }

    #[test]
    fn status_error_carries_message() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::Users, 503, json!({"message": "maintenance"}));
        let err = block_on(authorized_client(&mock, "t").participants()).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
        assert_eq!(err.backend_message(), Some("maintenance"));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let mock = MockTransport::new();
        mock.reply(Endpoint::UserCount, RawResponse::new(200, "<html>"));
        let err = block_on(authorized_client(&mock, "t").total_participants()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn event_export_is_binary_with_encoded_name() {
        let mock = MockTransport::new();
        mock.reply(Endpoint::ExportEvent, RawResponse::new(200, vec![0x50, 0x4b, 3, 4]));
        let target = ExportTarget::Event("Brain Battle (Day1)".into());
        let export = block_on(authorized_client(&mock, "t").export(&target)).unwrap();
        assert_eq!(export.bytes, vec![0x50, 0x4b, 3, 4]);
        assert_eq!(export.filename, "Brain_Battle_(Day1)_participants.xlsx");
        let sent = mock.requests();
        assert!(sent[0].binary);
        assert_eq!(
            sent[0].url,
            "http://localhost:6789/api/v1/exportEventToExcel?eventName=Brain%20Battle%20%28Day1%29"
        );
    }
}
