use crate::storage::{StorageError, TokenStorage};
use log::{info, warn};
use std::fmt;
use strum::{Display, EnumIter};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Login response did not contain a token")]
    EmptyToken,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The two independent protected areas, each with its own token slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SessionKind {
    Admin,
    Attendance,
}

impl SessionKind {
    pub fn storage_key(&self) -> &'static str {
        match self {
            SessionKind::Admin => "token",
            SessionKind::Attendance => "attendanceToken",
        }
    }
}

/// Opaque bearer credential, never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn parse(raw: impl Into<String>) -> Result<Self, SessionError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Option<String>> for Token {
    type Error = SessionError;

    fn try_from(raw: Option<String>) -> Result<Self, Self::Error> {
        raw.map_or(Err(SessionError::EmptyToken), Token::parse)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(REDACTED)")
    }
}

/// Snapshot of one session: which area it guards and the token, if signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kind: SessionKind,
    token: Option<Token>,
}

impl Session {
    pub fn anonymous(kind: SessionKind) -> Self {
        Self { kind, token: None }
    }

    pub fn authenticated(kind: SessionKind, token: Token) -> Self {
        Self {
            kind,
            token: Some(token),
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Both sessions as seen by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sessions {
    pub admin: Session,
    pub attendance: Session,
}

impl Sessions {
    pub fn anonymous() -> Self {
        Self {
            admin: Session::anonymous(SessionKind::Admin),
            attendance: Session::anonymous(SessionKind::Attendance),
        }
    }

    pub fn get(&self, kind: SessionKind) -> &Session {
        match kind {
            SessionKind::Admin => &self.admin,
            SessionKind::Attendance => &self.attendance,
        }
    }

    pub fn is_authenticated(&self, kind: SessionKind) -> bool {
        self.get(kind).is_authenticated()
    }
}

/// Owns one session and keeps it in step with its durable slot.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: TokenStorage> SessionStore<S> {
    /// Restores whatever token the previous page load persisted.
    pub fn load(kind: SessionKind, storage: S) -> Self {
        let token = storage
            .read(kind.storage_key())
            .and_then(|raw| Token::parse(raw).ok());
        if token.is_some() {
            info!("Restored {} session", kind);
        }
        Self {
            storage,
            session: Session { kind, token },
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.session.kind
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Rejects empty tokens without touching the current state.
    pub fn login(&mut self, token: &str) -> Result<(), SessionError> {
        self.login_with(Token::parse(token)?)
    }

    pub fn login_with(&mut self, token: Token) -> Result<(), SessionError> {
        let kind = self.session.kind;
        self.storage.write(kind.storage_key(), token.as_str())?;
        self.session.token = Some(token);
        info!("Signed in to {} session", kind);
        Ok(())
    }

    pub fn logout(&mut self) {
        let kind = self.session.kind;
        if self.session.token.take().is_none() {
            warn!("Logout requested for {} session without a token", kind);
        }
        self.storage.remove(kind.storage_key());
        info!("Signed out of {} session", kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::testing::ReadOnlyStorage;

    #[test]
    fn authenticated_only_between_login_and_logout() {
        let mut store = SessionStore::load(SessionKind::Admin, MemoryStorage::new());
        assert!(!store.is_authenticated());
        store.login("abc").unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.session().token().unwrap().as_str(), "abc");
        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.session().token().is_none());
    }

    #[test]
    fn empty_or_missing_token_never_authenticates() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(SessionKind::Admin, storage.clone());
        assert_eq!(store.login(""), Err(SessionError::EmptyToken));
        assert_eq!(store.login("   "), Err(SessionError::EmptyToken));
        assert_eq!(Token::try_from(None), Err(SessionError::EmptyToken));
        assert!(!store.is_authenticated());
        assert_eq!(storage.read("token"), None);
    }

    #[test]
    fn failed_login_keeps_existing_session() {
        let mut store = SessionStore::load(SessionKind::Admin, MemoryStorage::new());
        store.login("first").unwrap();
        assert!(store.login("").is_err());
        assert_eq!(store.session().token().unwrap().as_str(), "first");
    }

    #[test]
    fn token_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(SessionKind::Admin, storage.clone());
        store.login("tok123").unwrap();
        drop(store);

        let reloaded = SessionStore::load(SessionKind::Admin, storage);
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.session().token().unwrap().as_str(), "tok123");
    }

    #[test]
    fn logout_survives_reload() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::load(SessionKind::Admin, storage.clone());
        store.login("tok123").unwrap();
        store.logout();
        assert!(!SessionStore::load(SessionKind::Admin, storage).is_authenticated());
    }

    #[test]
    fn persisted_empty_token_is_ignored() {
        let storage = MemoryStorage::new();
        storage.write("token", "").unwrap();
        assert!(!SessionStore::load(SessionKind::Admin, storage).is_authenticated());
    }

    #[test]
    fn sessions_use_separate_slots() {
        let storage = MemoryStorage::new();
        let mut admin = SessionStore::load(SessionKind::Admin, storage.clone());
        let mut attendance = SessionStore::load(SessionKind::Attendance, storage.clone());
        attendance.login("desk").unwrap();
        assert!(!admin.is_authenticated());
        admin.login("coord").unwrap();
        admin.logout();
        assert!(attendance.is_authenticated());
        assert_eq!(storage.read("attendanceToken").as_deref(), Some("desk"));
        assert_eq!(storage.read("token"), None);
    }

    #[test]
    fn storage_failure_leaves_store_anonymous() {
        let mut store = SessionStore::load(SessionKind::Admin, ReadOnlyStorage);
        let err = store.login("abc").unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = Token::parse("secret").unwrap();
        assert!(!format!("{:?}", token).contains("secret"));
    }
}
