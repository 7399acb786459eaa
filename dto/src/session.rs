use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinator or attendance-desk login form contents.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Both fields filled in?
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"REDACTED")
            .finish()
    }
}

/// Payload of a successful admin login.
#[derive(Deserialize, Debug, Clone)]
pub struct AdminLoginPayload {
    #[serde(rename = "User")]
    pub user: LoginUser,
}

#[derive(Deserialize, Clone)]
pub struct LoginUser {
    pub token: String,
}

impl fmt::Debug for LoginUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginUser")
            .field("token", &"REDACTED")
            .finish()
    }
}

/// Payload of an attendance login. The token is absent when the login was refused.
#[derive(Deserialize, Default, Clone)]
pub struct AttendanceLoginPayload {
    #[serde(default)]
    pub token: Option<String>,
}

/// Attendance login answers with an envelope even when refusing, so the payload is optional.
#[derive(Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLoginResponse {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payload: Option<AttendanceLoginPayload>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("coord", "hunter2");
        let out = format!("{:?}", creds);
        assert!(out.contains("coord"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn incomplete_credentials() {
        assert!(!Credentials::new("", "x").is_complete());
        assert!(!Credentials::new("x", "").is_complete());
        assert!(Credentials::new("x", "y").is_complete());
    }

    #[test]
    fn admin_login_payload_shape() {
        let p: AdminLoginPayload =
            serde_json::from_str(r#"{"User": {"token": "abc", "name": "x"}}"#).unwrap();
        assert_eq!(p.user.token, "abc");
    }

    #[test]
    fn refused_attendance_login_has_no_payload() {
        let r: AttendanceLoginResponse =
            serde_json::from_str(r#"{"statusCode": 401, "message": "Bad user"}"#).unwrap();
        assert_eq!(r.status_code, 401);
        assert_eq!(r.message.as_deref(), Some("Bad user"));
        assert!(r.payload.is_none());
    }
}
