use crate::api::{ApiClient, ApiError};
use crate::session::{SessionStore, Token};
use crate::storage::TokenStorage;
use event_console_dto::session::Credentials;
use log::{error, info};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const ADMIN_LOGIN_FAILED: &str = "Error logging in. Please try again.";
pub const MISSING_CREDENTIALS: &str = "Please enter both username and password.";
pub const ATTENDANCE_REFUSED: &str = "Login failed";
pub const ATTENDANCE_LOGIN_FAILED: &str = "An error occurred, please try again.";
pub const SESSION_NOT_SAVED: &str =
    "Signed in, but the session could not be saved in this browser. Please try again.";

/// Signs a coordinator in. The error is the inline message for the login form.
pub async fn admin_sign_in(client: &ApiClient, credentials: Credentials) -> Result<Token, String> {
    match client.admin_login(&credentials).await {
        Ok(token) => {
            info!("Coordinator {} signed in", credentials.username);
            Ok(token)
        }
        Err(ApiError::InvalidCredentials) => Err(INVALID_CREDENTIALS.to_string()),
        Err(e) => {
            error!("Admin login failed: {}", e);
            Err(ADMIN_LOGIN_FAILED.to_string())
        }
    }
}

/// Signs the attendance desk in. Refusals show the backend's reason when it gave one.
pub async fn attendance_sign_in(
    client: &ApiClient,
    credentials: Credentials,
) -> Result<Token, String> {
    if !credentials.is_complete() {
        return Err(MISSING_CREDENTIALS.to_string());
    }
    match client.attendance_login(&credentials).await {
        Ok(token) => {
            info!("Attendance desk {} signed in", credentials.username);
            Ok(token)
        }
        Err(ApiError::Rejected(message)) => {
            Err(message.unwrap_or_else(|| ATTENDANCE_REFUSED.to_string()))
        }
        Err(e) => {
            error!("Attendance login failed: {}", e);
            Err(ATTENDANCE_LOGIN_FAILED.to_string())
        }
    }
}

/// Persists a fresh token and returns the signed-in store. On failure `store` is
/// untouched and the error is the inline message for the login form.
pub fn remember_sign_in<S: TokenStorage + Clone>(
    store: &SessionStore<S>,
    token: Token,
) -> Result<SessionStore<S>, String> {
    let mut signed_in = store.clone();
    match signed_in.login_with(token) {
        Ok(()) => Ok(signed_in),
        Err(e) => {
            error!("Could not store {} session: {}", store.kind(), e);
            Err(SESSION_NOT_SAVED.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;
    use crate::session::{SessionKind, SessionStore};
    use crate::storage::MemoryStorage;
    use crate::testing::{MockTransport, ReadOnlyStorage};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn bad_credentials_leave_session_anonymous() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AdminLogin, 401, json!({"statusCode": 401}));
        let store = SessionStore::load(SessionKind::Admin, MemoryStorage::new());
        let result = block_on(admin_sign_in(&mock.client(), Credentials::new("c", "bad")));
        assert_eq!(result, Err(INVALID_CREDENTIALS.to_string()));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn unreachable_backend_has_its_own_message() {
        let mock = MockTransport::new();
        mock.fail(Endpoint::AdminLogin);
        let result = block_on(admin_sign_in(&mock.client(), Credentials::new("c", "pw")));
        assert_eq!(result, Err(ADMIN_LOGIN_FAILED.to_string()));
    }

    #[test]
    fn successful_login_feeds_the_store() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AdminLogin, 200, json!({"statusCode": 200, "payload": {"User": {"token": "tok123"}}}));
        let storage = MemoryStorage::new();
        let store = SessionStore::load(SessionKind::Admin, storage.clone());
        let token = block_on(admin_sign_in(&mock.client(), Credentials::new("c", "pw"))).unwrap();
        let signed_in = remember_sign_in(&store, token).unwrap();
        assert!(signed_in.is_authenticated());
        assert_eq!(storage.read("token").as_deref(), Some("tok123"));
    }

    #[test]
    fn unsaved_token_is_reported_not_swallowed() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AttendanceLogin, 200, json!({"statusCode": 200, "payload": {"token": "desk"}}));
        let store = SessionStore::load(SessionKind::Attendance, ReadOnlyStorage);
        let token = block_on(attendance_sign_in(&mock.client(), Credentials::new("d", "x"))).unwrap();
        let result = remember_sign_in(&store, token);
        assert_eq!(result.map(|s| s.is_authenticated()), Err(SESSION_NOT_SAVED.to_string()));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn attendance_requires_both_fields() {
        let mock = MockTransport::new();
        let result = block_on(attendance_sign_in(&mock.client(), Credentials::new("desk", "")));
        assert_eq!(result, Err(MISSING_CREDENTIALS.to_string()));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn attendance_refusal_messages() {
        let mock = MockTransport::new();
        mock.reply_json(Endpoint::AttendanceLogin, 200, json!({"statusCode": 401, "message": "Bad user"}));
        let result = block_on(attendance_sign_in(&mock.client(), Credentials::new("d", "x")));
        assert_eq!(result, Err("Bad user".to_string()));

        mock.reply_json(Endpoint::AttendanceLogin, 200, json!({"statusCode": 403}));
        let result = block_on(attendance_sign_in(&mock.client(), Credentials::new("d", "x")));
        assert_eq!(result, Err(ATTENDANCE_REFUSED.to_string()));
    }

    #[test]
    fn attendance_non_json_is_generic_error() {
        let mock = MockTransport::new();
        mock.reply(Endpoint::AttendanceLogin, crate::transport::RawResponse::new(502, "Bad Gateway"));
        let result = block_on(attendance_sign_in(&mock.client(), Credentials::new("d", "x")));
        assert_eq!(result, Err(ATTENDANCE_LOGIN_FAILED.to_string()));
    }
}
